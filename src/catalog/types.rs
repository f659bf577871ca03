//! Catalog entry types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One security domain: a prefix used in rule ids, the markdown file that
/// holds its rules, and a short description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    pub prefix: &'static str,
    pub filename: &'static str,
    pub domain: &'static str,
    pub description: &'static str,
}

impl CatalogEntry {
    pub const fn new(
        prefix: &'static str,
        filename: &'static str,
        domain: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            prefix,
            filename,
            domain,
            description,
        }
    }

    pub fn summary(&self) -> DomainSummary {
        DomainSummary::from(self)
    }

    /// Resource locator under the given scheme, e.g. `secure-coding://rules/api-security`.
    pub fn resource_uri(&self, scheme: &str) -> String {
        format!("{}://rules/{}", scheme, self.domain)
    }

    /// Human-facing label used for resource descriptions.
    pub fn label(&self) -> String {
        format!("{}: {}", self.prefix, self.description)
    }
}

/// Public view of a catalog entry, as returned by `list_rules`.
/// Field order is part of the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DomainSummary {
    pub prefix: String,
    pub domain: String,
    pub description: String,
}

impl From<&CatalogEntry> for DomainSummary {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            prefix: entry.prefix.to_string(),
            domain: entry.domain.to_string(),
            description: entry.description.to_string(),
        }
    }
}
