//! Advice-section dialect. On top of the chat conventions, advice text
//! arrives with numbered markdown headers, known section titles, labeled
//! bullets, and `- ` lists. Rule order matters: every rule runs before the
//! newline conversions so that line-start anchors still see real lines.

use super::{convert_bold, convert_breaks};
use regex::Regex;

/// Section titles promoted to block-level headings, colon retained.
const SECTION_TITLES: [&str; 3] = ["Training Tips", "Exercise & Play", "Enrichment Activities"];

pub(super) fn format_advice(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = strip_numbered_headers(raw);
    let text = convert_bold(&text);
    let text = promote_section_titles(&text);
    let text = promote_bullet_labels(&text);
    let text = convert_list_markers(&text);
    convert_breaks(&text)
}

/// Strips leading `###`/`####` markers with an optional section number,
/// e.g. `### 1. Training Tips:` → `Training Tips:`.
fn strip_numbered_headers(text: &str) -> String {
    let re = Regex::new(r"(?m)^#{3,4}\s*\d*\.?\s*").unwrap();
    re.replace_all(text, "").into_owned()
}

/// Promotes the known advice section titles to headings. Anchored to line
/// starts, so a title already wrapped in a heading tag is left alone.
fn promote_section_titles(text: &str) -> String {
    let pattern = format!(r"(?m)^({}):", SECTION_TITLES.join("|"));
    let re = Regex::new(&pattern).unwrap();
    re.replace_all(text, "<h4>$1:</h4>").into_owned()
}

/// Promotes `• Label:` lines to a bolded sub-heading, bullet kept. The
/// character class excludes `<`, so a converted label does not match again.
fn promote_bullet_labels(text: &str) -> String {
    let re = Regex::new(r"(?m)^•\s+([^:<\n]+):").unwrap();
    re.replace_all(text, "• <strong>$1:</strong>").into_owned()
}

/// Converts `- item` lines to the visual bullet form.
fn convert_list_markers(text: &str) -> String {
    let re = Regex::new(r"(?m)^- ").unwrap();
    re.replace_all(text, "• ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_numbered_headers() {
        assert_eq!(
            strip_numbered_headers("### 1. Training Tips:\ntext"),
            "Training Tips:\ntext"
        );
        assert_eq!(strip_numbered_headers("#### Care\ntext"), "Care\ntext");
        assert_eq!(strip_numbered_headers("no header"), "no header");
    }

    #[test]
    fn test_promote_bullet_labels_skips_converted_lines() {
        let once = promote_bullet_labels("• Diet: feed twice daily");
        assert_eq!(once, "• <strong>Diet:</strong> feed twice daily");
        assert_eq!(promote_bullet_labels(&once), once);
    }
}
