//! Audit checklist extraction and table rendering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::headings::{HeadingLine, block_end, heading_lines};
use super::rule_id::RuleId;

/// Verification text used when a rule block has no `Verification:` line.
pub const MISSING_VERIFICATION: &str = "See rule file for details";

pub const TABLE_HEADER: &str = "| Rule ID | Rule | Verification |";
pub const TABLE_SEPARATOR: &str = "| :--- | :--- | :--- |";

const EMPHASIS: &[char] = &['*', '_'];
const BULLETS: &[&str] = &["- ", "* ", "+ "];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChecklistRecord {
    pub rule_id: String,
    pub rule: String,
    pub verification: String,
}

/// Parse every `### [<PREFIX>-<NN>] <title>` block into a record, in document order.
///
/// Within a block, the first `Rule:` and `Verification:` labelled lines supply
/// the fields. A missing `Rule:` falls back to the heading title; a missing
/// `Verification:` falls back to [`MISSING_VERIFICATION`]. Returns an empty
/// list when no heading qualifies.
pub fn parse_checklist(text: &str) -> Vec<ChecklistRecord> {
    let headings = heading_lines(text);

    headings
        .iter()
        .enumerate()
        .filter_map(|(index, heading)| {
            let (rule_id, title) = checklist_heading(heading)?;
            let body = &text[heading.end..block_end(text, &headings, index)];

            Some(ChecklistRecord {
                rule_id: rule_id.to_string(),
                rule: labelled_value(body, "Rule")
                    .unwrap_or(title)
                    .to_string(),
                verification: labelled_value(body, "Verification")
                    .unwrap_or(MISSING_VERIFICATION)
                    .to_string(),
            })
        })
        .collect()
}

/// Split a heading line into its rule id and title. The id must have the
/// `<PREFIX>-<NN>` shape and be followed by whitespace.
fn checklist_heading<'a>(heading: &HeadingLine<'a>) -> Option<(RuleId<'a>, &'a str)> {
    let (token, rest) = heading.after_marker().split_once(']')?;
    let rule_id = RuleId::parse(token)?;

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((rule_id, rest.trim()))
}

/// First line in `body` carrying `label:`, optionally bulleted and wrapped in
/// emphasis (`**Rule:**`, `- **Rule**:`, `_Rule:_`).
fn labelled_value<'a>(body: &'a str, label: &str) -> Option<&'a str> {
    body.lines().find_map(|line| label_value(line, label))
}

fn label_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let mut rest = line.trim_start();
    if let Some(stripped) = BULLETS.iter().find_map(|b| rest.strip_prefix(b)) {
        rest = stripped.trim_start();
    }

    let rest = rest
        .trim_start_matches(EMPHASIS)
        .strip_prefix(label)?
        .trim_start_matches(EMPHASIS)
        .strip_prefix(':')?
        .trim_start_matches(EMPHASIS);

    Some(rest.trim())
}

/// Render records as a three-column markdown table. Pipes inside cells are
/// escaped so every row keeps exactly three columns.
pub fn render_checklist_table(records: &[ChecklistRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(TABLE_HEADER.to_string());
    lines.push(TABLE_SEPARATOR.to_string());

    for record in records {
        lines.push(format!(
            "| {} | {} | {} |",
            escape_cell(&record.rule_id),
            escape_cell(&record.rule),
            escape_cell(&record.verification)
        ));
    }

    lines.join("\n")
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}
