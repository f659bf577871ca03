//! Access to raw rule file text.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::{Result, RulesError};

/// Source of rule file contents, keyed by catalog filename.
///
/// Text is read fresh on every call; implementations must not cache.
#[async_trait]
pub trait RuleSource: Send + Sync {
    async fn read_rule_file(&self, filename: &str) -> Result<String>;
}

/// Reads rule files from the resolved corpus directory.
#[derive(Debug, Clone)]
pub struct FsRuleSource {
    root: PathBuf,
}

impl FsRuleSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl RuleSource for FsRuleSource {
    async fn read_rule_file(&self, filename: &str) -> Result<String> {
        let path = self.root.join(filename);
        debug!(path = %path.display(), "Reading rule file");
        fs::read_to_string(&path)
            .await
            .map_err(|source| RulesError::RuleFileRead {
                filename: filename.to_string(),
                source,
            })
    }
}
