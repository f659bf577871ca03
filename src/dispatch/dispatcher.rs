//! Query dispatcher: catalog lookups plus markdown slicing.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::{CatalogEntry, DomainSummary, RuleCatalog};
use crate::config::ServerConfig;
use crate::corpus::{FsRuleSource, RuleSource};
use crate::error::{Result, RulesError};
use crate::markdown::{
    ChecklistRecord, RuleId, extract_rule_section, parse_checklist, render_checklist_table,
};

/// Translates requests into catalog lookups and extractor/parser calls.
///
/// Stateless apart from the catalog and the rule source, both fixed at
/// construction. Every call reads its file fresh.
#[derive(Clone)]
pub struct QueryDispatcher {
    catalog: Arc<RuleCatalog>,
    source: Arc<dyn RuleSource>,
}

impl QueryDispatcher {
    pub fn new(catalog: RuleCatalog, source: Arc<dyn RuleSource>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            source,
        }
    }

    /// Resolve the corpus directory and build a filesystem-backed dispatcher
    /// over the built-in catalog. Fails fast if no candidate holds rule files.
    pub async fn bootstrap(config: &ServerConfig, rules_dir: Option<&Path>) -> Result<Self> {
        let root = config.corpus_locator(rules_dir).resolve().await?;
        Ok(Self::new(
            RuleCatalog::owasp(),
            Arc::new(FsRuleSource::new(root)),
        ))
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Every catalog entry's public triple, in definition order.
    pub fn list_rules(&self) -> Vec<DomainSummary> {
        self.catalog.summaries()
    }

    /// `list_rules` as two-space indented JSON.
    pub fn list_rules_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.list_rules())?)
    }

    /// Fetch one rule (`PREFIX-NN`) or a whole domain file (domain slug).
    pub async fn get_rule(&self, identifier: &str) -> Result<String> {
        match RuleId::parse(identifier) {
            Some(rule_id) => self.get_rule_section(rule_id).await,
            None => self.read_domain(identifier).await,
        }
    }

    async fn get_rule_section(&self, rule_id: RuleId<'_>) -> Result<String> {
        let entry = self.catalog.by_prefix(rule_id.prefix())?;
        let content = self.read_entry(entry).await?;

        let section = extract_rule_section(&content, rule_id.as_str()).ok_or_else(|| {
            RulesError::RuleNotFound {
                rule_id: rule_id.to_string(),
                filename: entry.filename.to_string(),
            }
        })?;

        debug!(rule_id = %rule_id, bytes = section.len(), "Extracted rule section");
        Ok(section.to_string())
    }

    /// Full raw text of a domain's file, verbatim.
    pub async fn read_domain(&self, domain: &str) -> Result<String> {
        let entry = self.catalog.by_domain(domain)?;
        self.read_entry(entry).await
    }

    /// Parsed checklist records for a domain. Empty results are an error here.
    pub async fn checklist_records(&self, domain: &str) -> Result<Vec<ChecklistRecord>> {
        let entry = self
            .catalog
            .by_domain(domain)
            .map_err(|_| RulesError::UnknownDomain(domain.to_string()))?;
        let content = self.read_entry(entry).await?;

        let records = parse_checklist(&content);
        if records.is_empty() {
            return Err(RulesError::EmptyChecklist(entry.filename.to_string()));
        }

        debug!(domain = entry.domain, count = records.len(), "Parsed checklist");
        Ok(records)
    }

    /// Checklist rendered as a `Rule ID | Rule | Verification` markdown table.
    pub async fn audit_checklist(&self, domain: &str) -> Result<String> {
        let records = self.checklist_records(domain).await?;
        Ok(render_checklist_table(&records))
    }

    async fn read_entry(&self, entry: &CatalogEntry) -> Result<String> {
        self.source
            .read_rule_file(entry.filename)
            .await
            .inspect_err(|e| warn!(domain = entry.domain, error = %e, "Rule file read failed"))
    }
}
