use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::corpus::{CorpusLocator, DEFAULT_EXTENSIONS};
use crate::error::{Result, RulesError};

pub const DEFAULT_SERVER_NAME: &str = "owasp-secure-coding";
pub const DEFAULT_RESOURCE_SCHEME: &str = "secure-coding";
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerInfoConfig,
    pub corpus: CorpusConfig,
    pub resources: ResourceConfig,
}

impl ServerConfig {
    /// Load from a TOML file. No path means defaults; an explicit path that
    /// does not exist is an error.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(RulesError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                let content = fs::read_to_string(path).await?;
                toml::from_str(&content)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| RulesError::Config(e.to_string()))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Validate configuration values. All problems are reported together.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.server.name.trim().is_empty() {
            errors.push("server.name must not be empty");
        }
        if self.server.version.trim().is_empty() {
            errors.push("server.version must not be empty");
        }

        if self.corpus.extensions.is_empty() {
            errors.push("corpus.extensions must not be empty");
        }
        if self
            .corpus
            .extensions
            .iter()
            .any(|e| e.is_empty() || e.starts_with('.'))
        {
            errors.push("corpus.extensions entries must be non-empty and have no leading dot");
        }

        if !is_valid_scheme(&self.resources.scheme) {
            errors.push(
                "resources.scheme must start with a letter and contain only letters, digits, '+', '-' or '.'",
            );
        }
        if self.resources.mime_type.trim().is_empty() {
            errors.push("resources.mime_type must not be empty");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RulesError::Config(errors.join("; ")))
        }
    }

    /// Corpus candidates in priority order: explicit override, configured
    /// directories, then the built-in locations.
    pub fn corpus_candidates(&self, override_dir: Option<&Path>) -> Vec<PathBuf> {
        override_dir
            .map(Path::to_path_buf)
            .into_iter()
            .chain(self.corpus.rules_dirs.iter().cloned())
            .chain(CorpusLocator::default_candidates())
            .collect()
    }

    pub fn corpus_locator(&self, override_dir: Option<&Path>) -> CorpusLocator {
        CorpusLocator::new(self.corpus_candidates(override_dir))
            .with_extensions(self.corpus.extensions.clone())
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerInfoConfig {
    /// Name reported to clients in `initialize`.
    pub name: String,
    pub version: String,
}

impl Default for ServerInfoConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Extra directories searched before the built-in locations.
    pub rules_dirs: Vec<PathBuf>,
    /// File extensions (without dot) that mark a directory as a rule corpus.
    pub extensions: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            rules_dirs: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// URI scheme for per-domain resources: `<scheme>://rules/<domain>`.
    pub scheme: String,
    pub mime_type: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_RESOURCE_SCHEME.into(),
            mime_type: MARKDOWN_MIME_TYPE.into(),
        }
    }
}
