//! # Catalog Configuration
//!
//! Loads the prompt catalog for the CLI: the built-in defaults, optionally
//! overlaid with a user YAML file. `${VAR}` placeholders in the file are
//! substituted from the environment before parsing, so catalogs can embed
//! deployment-specific text without editing the file per environment.

use anyhow::{Context, Result};
use pawmate::PromptCatalog;
use regex::Regex;
use std::env;
use std::fs;
use tracing::info;

/// Loads the catalog, applying the override file when one is configured.
pub fn load_catalog(path: Option<&str>) -> Result<PromptCatalog> {
    let Some(path) = path else {
        return Ok(PromptCatalog::with_defaults());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read prompt catalog '{path}'"))?;
    let expanded = substitute_env_vars(&content);

    info!("Loading prompt catalog overrides from '{path}'.");
    PromptCatalog::with_overrides(&expanded)
        .with_context(|| format!("Failed to parse prompt catalog '{path}'"))
}

/// Replaces `${VAR}` placeholders with environment values; unset variables
/// become empty strings.
fn substitute_env_vars(content: &str) -> String {
    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").unwrap();
    re.replace_all(content, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_substitute_env_vars() {
        env::set_var("PAWMATE_TEST_CLINIC", "Sunny Paws");

        let expanded = substitute_env_vars("Call ${PAWMATE_TEST_CLINIC} today");

        assert_eq!(expanded, "Call Sunny Paws today");
    }

    #[test]
    fn test_unset_vars_become_empty() {
        let expanded = substitute_env_vars("before ${PAWMATE_TEST_UNSET_VAR} after");

        assert_eq!(expanded, "before  after");
    }

    #[test]
    fn test_load_catalog_without_path_uses_defaults() {
        let catalog = load_catalog(None).expect("defaults should load");

        assert!(catalog.contains("general"));
    }

    #[test]
    fn test_load_catalog_applies_file_overrides() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "general:").expect("write");
        writeln!(file, "  - \"Overridden prompt\"").expect("write");

        let path = file.path().to_string_lossy().into_owned();
        let catalog = load_catalog(Some(&path)).expect("override should load");

        assert_eq!(catalog.get("general").to_vec(), vec!["Overridden prompt"]);
    }
}
