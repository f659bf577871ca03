//! Single rule section extraction.

use super::headings::{HEADING_MARKER, block_end, heading_lines};

/// Return the block for `rule_id`: from its `### [<rule_id>]` heading line up
/// to, not including, the next `### [` line, trimmed.
///
/// The id is compared literally. Only the first matching heading is used.
pub fn extract_rule_section<'a>(text: &'a str, rule_id: &str) -> Option<&'a str> {
    let needle = format!("{HEADING_MARKER}{rule_id}]");
    let headings = heading_lines(text);

    let index = headings.iter().position(|h| h.line.starts_with(&needle))?;
    let start = headings[index].start;
    let end = block_end(text, &headings, index);

    Some(text[start..end].trim())
}
