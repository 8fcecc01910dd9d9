//! # Markup Formatter
//!
//! Converts the assistant's constrained markdown-like text into renderable
//! HTML markers. Two dialects exist: plain chat messages, and multi-section
//! advice text (training, stool, and rescue summaries).
//!
//! The formatter only ever injects markers; unmatched input passes through
//! untouched. Running it a second time over its own output is a no-op,
//! because no rule matches the token shapes the rules emit.

mod advice;

use crate::types::Dialect;
use regex::Regex;

/// Formats `raw` according to the given markup dialect.
pub fn format(raw: &str, dialect: Dialect) -> String {
    match dialect {
        Dialect::Chat => format_chat(raw),
        Dialect::Advice => advice::format_advice(raw),
    }
}

/// Chat messages carry bold markers, paragraph breaks, and bullet
/// continuations, applied in that order.
fn format_chat(raw: &str) -> String {
    let text = convert_bold(raw);
    convert_breaks(&text)
}

/// `**text**` → `<strong>text</strong>`, non-greedy and non-overlapping.
/// The `**..**` token shape does not survive conversion, so an already
/// converted span is never re-wrapped.
pub(crate) fn convert_bold(text: &str) -> String {
    let re = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    re.replace_all(text, "<strong>$1</strong>").into_owned()
}

/// Double newlines become paragraph breaks; a remaining newline directly
/// before a bullet glyph becomes a single break with the glyph preserved.
pub(crate) fn convert_breaks(text: &str) -> String {
    text.replace("\n\n", "<br><br>").replace("\n•", "<br>•")
}
