//! Query dispatch for the three catalog operations.
//!
//! - `list_rules`: enumerate the catalog
//! - `get_rule`: one rule section or a whole domain file
//! - `audit_checklist`: a `Rule ID | Rule | Verification` table for a domain

mod dispatcher;
mod response;

pub use dispatcher::QueryDispatcher;
pub use response::ToolResponse;
