//! # Pet-Care Assistant Text Core
//!
//! This crate provides the text pipeline behind a pet-care assistant UI:
//! keyword classification of veterinary analysis text into an ordered list
//! of suggested follow-up prompts, and conversion of the assistant's
//! constrained markdown-like output into renderable HTML.
//!
//! The host application obtains analysis text from an upload or a chat
//! response, calls [`parse_analysis`] and [`suggest_prompts`] to build the
//! suggestion list, and runs both the prompts and the message through
//! [`format`] before display.
//!
//! All operations run to completion on the calling thread: no I/O, no
//! shared mutable state. The [`PromptCatalog`] is built once and is safe to
//! share read-only across concurrent callers.

pub mod analysis;
pub mod catalog;
pub mod classify;
pub mod errors;
pub mod format;
pub mod prompts;
pub mod types;

pub use analysis::parse_analysis;
pub use catalog::{PromptCatalog, DEFAULT_CATEGORY};
pub use classify::{classify, suggest_prompts};
pub use errors::{AnalysisError, CatalogError};
pub use format::format;
pub use types::{AnalysisText, Dialect};
