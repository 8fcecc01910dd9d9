//! # Keyword Classifier
//!
//! Scans free-form analysis text for trigger keywords and produces the
//! ordered list of suggested follow-up prompts. The rule table is data, not
//! control flow: an ordered slice of (keywords, action) pairs evaluated in
//! sequence. Rules are independent and additive, and matching is plain
//! case-insensitive substring containment, so "follow" also fires on
//! "following".

use crate::catalog::PromptCatalog;
use crate::types::AnalysisText;
use tracing::debug;

/// What a fired rule contributes to the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Append every prompt of a catalog category.
    Category(&'static str),
    /// Append a single fixed prompt.
    Literal(&'static str),
}

/// A single classification rule, fired when any of its keywords occurs in
/// the lowercased text. An empty keyword list fires unconditionally.
#[derive(Debug)]
pub struct ClassifyRule {
    pub keywords: &'static [&'static str],
    pub action: RuleAction,
}

/// The ordered rule table. Evaluation order is output order; the
/// unconditional `general` rule is last so its prompts always close the
/// suggestion list.
pub const CLASSIFY_RULES: &[ClassifyRule] = &[
    ClassifyRule {
        keywords: &["medication", "prescribed"],
        action: RuleAction::Category("medication"),
    },
    ClassifyRule {
        keywords: &["follow", "next visit"],
        action: RuleAction::Category("followup"),
    },
    ClassifyRule {
        keywords: &["blood"],
        action: RuleAction::Literal("What do these blood test results mean?"),
    },
    ClassifyRule {
        keywords: &["diet", "food"],
        action: RuleAction::Literal("What diet changes are recommended?"),
    },
    ClassifyRule {
        keywords: &["weight"],
        action: RuleAction::Literal("How can I help manage my pet's weight?"),
    },
    ClassifyRule {
        keywords: &["dental", "teeth"],
        action: RuleAction::Literal("What dental care is needed?"),
    },
    ClassifyRule {
        keywords: &[],
        action: RuleAction::Category("general"),
    },
];

/// Classifies analysis text into an ordered list of suggested prompts.
///
/// The fields are joined with single spaces and lowercased before matching.
/// Text containing no trigger keywords yields exactly the `general`
/// category prompts. Category lookups go through the catalog and inherit
/// its `default` fallback.
pub fn classify(catalog: &PromptCatalog, fields: &[&str]) -> Vec<String> {
    let haystack = fields.join(" ").to_lowercase();

    let mut prompts = Vec::new();
    for rule in CLASSIFY_RULES {
        let fired =
            rule.keywords.is_empty() || rule.keywords.iter().any(|kw| haystack.contains(kw));
        if !fired {
            continue;
        }

        match rule.action {
            RuleAction::Category(key) => {
                debug!("Classification rule fired for category `{key}`");
                prompts.extend(catalog.get(key).iter().cloned());
            }
            RuleAction::Literal(prompt) => {
                debug!("Literal classification rule fired: {prompt}");
                prompts.push(prompt.to_string());
            }
        }
    }

    prompts
}

/// Classifies a parsed analysis, feeding its fields in report order:
/// synopsis, insights, then follow-up actions.
pub fn suggest_prompts(catalog: &PromptCatalog, analysis: &AnalysisText) -> Vec<String> {
    classify(catalog, &analysis.fields())
}
