//! Startup resolution of the rules directory.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use crate::error::{Result, RulesError};

pub const DEFAULT_EXTENSIONS: &[&str] = &["md"];

/// Finds the directory holding the markdown corpus.
///
/// Candidates are tried in order; the first directory that exists and holds
/// at least one file with a recognized extension wins. There is no lazy retry:
/// if nothing matches, startup fails with every candidate listed.
#[derive(Debug, Clone)]
pub struct CorpusLocator {
    candidates: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl CorpusLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Built-in search order: `<cwd>/rules` (container layout), then
    /// `<exe_dir>/../../rules` and `<exe_dir>/../rules` (checkout layouts).
    pub fn default_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join("rules"));
        }
        if let Ok(exe) = std::env::current_exe()
            && let Some(exe_dir) = exe.parent()
        {
            candidates.push(exe_dir.join("..").join("..").join("rules"));
            candidates.push(exe_dir.join("..").join("rules"));
        }
        candidates
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub async fn resolve(&self) -> Result<PathBuf> {
        for dir in &self.candidates {
            if self.holds_rule_files(dir).await {
                info!(path = %dir.display(), "Resolved rules directory");
                return Ok(dir.clone());
            }
            debug!(path = %dir.display(), "No rule files in candidate, trying next");
        }

        Err(RulesError::CorpusNotFound {
            searched: self.candidates.clone(),
        })
    }

    async fn holds_rule_files(&self, dir: &Path) -> bool {
        let Ok(mut entries) = fs::read_dir(dir).await else {
            return false;
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if self.is_rule_file(&path)
                && fs::metadata(&path).await.is_ok_and(|m| m.is_file())
            {
                return true;
            }
        }
        false
    }

    fn is_rule_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known == ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_first_matching_candidate_wins() {
        let temp = TempDir::new().unwrap();
        let empty = temp.path().join("empty");
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        for dir in [&empty, &first, &second] {
            fs::create_dir_all(dir).await.unwrap();
        }
        fs::write(empty.join("notes.txt"), "x").await.unwrap();
        fs::write(first.join("a.md"), "# A").await.unwrap();
        fs::write(second.join("b.md"), "# B").await.unwrap();

        let locator = CorpusLocator::new(vec![
            temp.path().join("missing"),
            empty.clone(),
            first.clone(),
            second,
        ]);
        assert_eq!(locator.resolve().await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_failure_lists_every_candidate() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");

        let err = CorpusLocator::new(vec![a.clone(), b.clone()])
            .resolve()
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Rules directory not found. Searched: "));
        assert!(message.contains(&a.display().to_string()));
        assert!(message.contains(&b.display().to_string()));
    }

    #[tokio::test]
    async fn test_directory_named_like_rule_file_is_ignored() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("fake.md")).await.unwrap();

        let locator = CorpusLocator::new(vec![temp.path().to_path_buf()]);
        assert!(locator.resolve().await.is_err());
    }

    #[tokio::test]
    async fn test_custom_extensions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("rules.markdown"), "# R")
            .await
            .unwrap();

        let locator = CorpusLocator::new(vec![temp.path().to_path_buf()]);
        assert!(locator.resolve().await.is_err());

        let locator = locator.with_extensions(vec!["markdown".into()]);
        assert!(locator.resolve().await.is_ok());
    }

    #[test]
    fn test_default_candidates_start_with_cwd() {
        let candidates = CorpusLocator::default_candidates();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(candidates.first(), Some(&cwd.join("rules")));
    }
}
