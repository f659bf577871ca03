//! Line scanner for `### [<id>] <title>` rule headings.
//!
//! Two passes instead of a regex: first collect every line that opens a rule
//! block, then slice the text between consecutive block starts.

/// Prefix that opens a rule block at the start of a line.
pub const HEADING_MARKER: &str = "### [";

/// A line that opens a rule block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    /// Byte offset of the first character of the line.
    pub start: usize,
    /// Byte offset just past the line content (before `\n`, or end of text).
    pub end: usize,
    pub line: &'a str,
}

impl<'a> HeadingLine<'a> {
    /// Text after the marker, e.g. `INPUT-01] Validate input`.
    pub fn after_marker(&self) -> &'a str {
        &self.line[HEADING_MARKER.len()..]
    }
}

/// Every line beginning with `### [`, in document order.
pub fn heading_lines(text: &str) -> Vec<HeadingLine<'_>> {
    let mut headings = Vec::new();
    let mut offset = 0;

    for line in text.split('\n') {
        let start = offset;
        offset += line.len() + 1;
        if line.starts_with(HEADING_MARKER) {
            headings.push(HeadingLine {
                start,
                end: start + line.len(),
                line,
            });
        }
    }

    headings
}

/// End offset of the block opened by `headings[index]`: the start of the next
/// heading line, or end of text.
pub fn block_end(text: &str, headings: &[HeadingLine<'_>], index: usize) -> usize {
    headings
        .get(index + 1)
        .map(|next| next.start)
        .unwrap_or(text.len())
}
