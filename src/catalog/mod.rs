//! Rule catalog: the fixed table of security domains.
//!
//! | Prefix | Domain              | File                  |
//! |--------|---------------------|-----------------------|
//! | INPUT  | input-validation    | input-validation.md   |
//! | API    | api-security        | api-security.md       |
//! | ...    | (22 entries total)  |                       |
//!
//! Rule ids take the form `<PREFIX>-<NN>` and live in the domain's file.

mod registry;
mod types;

pub use registry::{OWASP_CATALOG, RuleCatalog};
pub use types::{CatalogEntry, DomainSummary};
