//! One-shot command output.
//!
//! - `OutputWriter`: renders catalog listings, rule text and checklists as
//!   styled text or JSON

mod writer;

pub use writer::OutputWriter;
