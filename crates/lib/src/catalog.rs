//! # Prompt Catalog
//!
//! The immutable mapping from category keys to ordered suggested-prompt
//! lists. A catalog is assembled once at startup, from the built-in
//! defaults and optionally a user-supplied YAML layer, and is then shared
//! read-only across callers.
//!
//! Category keys are flat strings; namespaces use dotted keys such as
//! `training.dog`. A YAML layer may express namespaces either as dotted
//! keys or as nested maps, which are flattened on load.

use crate::errors::CatalogError;
use crate::prompts::{
    DEFAULT_PROMPTS, FOLLOWUP_PROMPTS, GENERAL_PROMPTS, HEALTH_CONCERNS_PROMPTS,
    MEDICATION_PROMPTS, POOP_ANALYSIS_PROMPTS, TRAINING_CAT_PROMPTS, TRAINING_DOG_PROMPTS,
};
use serde_yaml::Value;
use std::collections::HashMap;
use tracing::debug;

/// The category every lookup falls back to when a key is absent.
pub const DEFAULT_CATEGORY: &str = "default";

/// An immutable category → prompt-list mapping with a guaranteed `default`
/// fallback category.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    categories: HashMap<String, Vec<String>>,
}

impl PromptCatalog {
    /// Builds the catalog from the built-in default content.
    pub fn with_defaults() -> Self {
        let defaults: &[(&str, &[&str])] = &[
            (DEFAULT_CATEGORY, DEFAULT_PROMPTS),
            ("general", GENERAL_PROMPTS),
            ("medication", MEDICATION_PROMPTS),
            ("followup", FOLLOWUP_PROMPTS),
            ("health_concerns", HEALTH_CONCERNS_PROMPTS),
            ("poop_analysis", POOP_ANALYSIS_PROMPTS),
            ("training.dog", TRAINING_DOG_PROMPTS),
            ("training.cat", TRAINING_CAT_PROMPTS),
        ];

        let categories = defaults
            .iter()
            .map(|(key, prompts)| {
                let prompts = prompts.iter().map(|p| p.to_string()).collect();
                (key.to_string(), prompts)
            })
            .collect();

        Self { categories }
    }

    /// Parses a complete catalog from YAML.
    ///
    /// Nested maps are flattened into dotted keys. A catalog without a
    /// `default` category is rejected, since lookups rely on it as the
    /// fallback.
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_yaml::from_str(content)?;
        let mut categories = HashMap::new();
        flatten_categories("", &value, &mut categories)?;

        if !categories.contains_key(DEFAULT_CATEGORY) {
            return Err(CatalogError::MissingDefault);
        }

        Ok(Self { categories })
    }

    /// Merges a YAML override layer on top of the built-in defaults.
    ///
    /// Unlike [`PromptCatalog::from_yaml`], the layer may omit `default`;
    /// the built-in category is kept. An overridden category replaces the
    /// built-in list wholesale, never splices into it.
    pub fn with_overrides(content: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::with_defaults();

        let value: Value = serde_yaml::from_str(content)?;
        let mut layer = HashMap::new();
        flatten_categories("", &value, &mut layer)?;

        for (key, prompts) in layer {
            debug!("Overriding prompt category `{key}` ({} prompts)", prompts.len());
            catalog.categories.insert(key, prompts);
        }

        Ok(catalog)
    }

    /// Returns the prompts for `key`, in catalog order, falling back to the
    /// `default` category when the key is absent.
    pub fn get(&self, key: &str) -> &[String] {
        match self.categories.get(key) {
            Some(prompts) => prompts,
            None => {
                debug!("Prompt category `{key}` not found, falling back to `{DEFAULT_CATEGORY}`");
                self.categories
                    .get(DEFAULT_CATEGORY)
                    .map(Vec::as_slice)
                    .unwrap_or_default()
            }
        }
    }

    /// Returns whether the catalog has an explicit entry for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }
}

/// Recursively flattens a YAML mapping into dotted category keys, each
/// holding a list of prompt strings.
fn flatten_categories(
    prefix: &str,
    value: &Value,
    out: &mut HashMap<String, Vec<String>>,
) -> Result<(), CatalogError> {
    let Value::Mapping(map) = value else {
        return Err(CatalogError::NotAMapping);
    };

    for (name, entry) in map {
        let Some(name) = name.as_str() else {
            return Err(CatalogError::NotAMapping);
        };
        let key = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match entry {
            Value::Sequence(items) => {
                let mut prompts = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(prompt) => prompts.push(prompt.to_string()),
                        None => return Err(CatalogError::InvalidPrompt(key)),
                    }
                }
                out.insert(key, prompts);
            }
            Value::Mapping(_) => flatten_categories(&key, entry, out)?,
            _ => return Err(CatalogError::InvalidPrompt(key)),
        }
    }

    Ok(())
}
