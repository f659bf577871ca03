//! Markdown slicing over rule headings.
//!
//! Rule files are plain markdown where each rule opens with a level-3
//! heading of the form `### [<PREFIX>-<NN>] <title>`. A rule's block runs to
//! the next `### [` line or end of file:
//!
//! ```text
//! ### [INPUT-01] Validate all input       <- block start
//! **Rule:** ...                           <- checklist "Rule" field
//! **Verification:** ...                   <- checklist "Verification" field
//! ### [INPUT-02] ...                      <- next block start
//! ```

mod checklist;
mod headings;
mod rule_id;
mod section;

pub use checklist::{
    ChecklistRecord, MISSING_VERIFICATION, TABLE_HEADER, TABLE_SEPARATOR, parse_checklist,
    render_checklist_table,
};
pub use headings::{HEADING_MARKER, HeadingLine, heading_lines};
pub use rule_id::RuleId;
pub use section::extract_rule_section;
