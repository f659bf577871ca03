pub mod catalog;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod dispatch;
pub mod error;
pub mod markdown;
pub mod output;
pub mod server;

pub use catalog::{CatalogEntry, DomainSummary, RuleCatalog};
pub use config::ServerConfig;
pub use corpus::{CorpusLocator, FsRuleSource, RuleSource};
pub use dispatch::{QueryDispatcher, ToolResponse};
pub use error::{Result, RulesError};
pub use markdown::{ChecklistRecord, extract_rule_section, parse_checklist};
pub use server::McpHandler;
