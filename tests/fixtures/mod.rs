//! Shared fixtures: a small on-disk rule corpus and dispatchers over it.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use secure_coding_mcp::catalog::{CatalogEntry, OWASP_CATALOG, RuleCatalog};
use secure_coding_mcp::config::ServerConfig;
use secure_coding_mcp::corpus::FsRuleSource;
use secure_coding_mcp::dispatch::QueryDispatcher;
use secure_coding_mcp::server::McpHandler;

pub fn rules_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("rules")
}

pub fn read_fixture(filename: &str) -> String {
    std::fs::read_to_string(rules_dir().join(filename)).unwrap()
}

/// The built-in catalog plus two test-only domains: one whose file has no
/// rule blocks and one whose file does not exist.
pub fn fixture_catalog() -> RuleCatalog {
    let mut entries = OWASP_CATALOG.to_vec();
    entries.push(CatalogEntry::new(
        "NOTES",
        "no-checklist.md",
        "notes",
        "Headings without rule blocks",
    ));
    entries.push(CatalogEntry::new(
        "GONE",
        "missing.md",
        "gone",
        "File absent from corpus",
    ));
    RuleCatalog::new(entries).unwrap()
}

pub fn fixture_dispatcher() -> QueryDispatcher {
    QueryDispatcher::new(
        fixture_catalog(),
        Arc::new(FsRuleSource::new(rules_dir())),
    )
}

pub fn fixture_handler() -> McpHandler {
    McpHandler::new(fixture_dispatcher(), &ServerConfig::default())
}

/// Number of lines in `text` starting with `### [<prefix>-`.
pub fn count_rule_headings(text: &str, prefix: &str) -> usize {
    let marker = format!("### [{}-", prefix);
    text.lines().filter(|l| l.starts_with(&marker)).count()
}
