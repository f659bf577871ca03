use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Rules directory not found. Searched: {}", format_candidates(.searched))]
    CorpusNotFound { searched: Vec<PathBuf> },

    #[error("Unknown rule prefix: {0}. Use list_rules to see available domains.")]
    UnknownPrefix(String),

    #[error("Unknown domain: {0}. Use list_rules to see available domains.")]
    UnknownDomain(String),

    #[error("Rule {rule_id} not found in {filename}.")]
    RuleNotFound { rule_id: String, filename: String },

    #[error("No checklist rules found in {0}.")]
    EmptyChecklist(String),

    #[error("Failed to read rule file {filename}: {source}")]
    RuleFileRead {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource not found: {0}")]
    UnknownResource(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RulesError {
    /// Errors caused by a single request that the caller can act on.
    /// Everything else is either fatal at startup or a protocol fault.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownPrefix(_)
                | Self::UnknownDomain(_)
                | Self::RuleNotFound { .. }
                | Self::EmptyChecklist(_)
                | Self::RuleFileRead { .. }
        )
    }
}

fn format_candidates(searched: &[PathBuf]) -> String {
    searched
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, RulesError>;
