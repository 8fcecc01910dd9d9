use thiserror::Error;

/// Custom error types for prompt catalog construction.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse prompt catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Prompt catalog is missing the required `default` category")]
    MissingDefault,
    #[error("Prompt catalog root must be a mapping of categories")]
    NotAMapping,
    #[error("Catalog entry `{0}` is not a list of strings")]
    InvalidPrompt(String),
}

/// Custom error types for analysis response parsing.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Analysis response contained no recognizable sections")]
    EmptyContent,
}
