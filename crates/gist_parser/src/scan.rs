// crates/gist_parser/src/scan.rs

use crate::error::ParseError;

/// Literal substring that opens a gist section, matched case-insensitively
/// anywhere within a line.
pub const START_MARKER: &str = "start gist";

/// Literal substring that closes a gist section, matched case-insensitively
/// anywhere within a line.
pub const END_MARKER: &str = "end gist";

/// Inclusive line range between the resolved start and end marker lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpan {
    pub start: usize,
    pub end: usize,
}

/// Splits `content` into lines, keeping blank lines and the segment after
/// the final newline, with spaces and carriage returns trimmed per line.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.trim_matches(|c| c == ' ' || c == '\r').to_string())
        .collect()
}

/// Resolves the marker pair over pre-split lines.
///
/// The scan is deliberately asymmetric: the start index is overwritten on
/// every match so the LAST start line wins, while the end index is recorded
/// on the first match so the FIRST end line wins. A start line at or after
/// the end line makes the document non-gistable; at least one line must
/// separate the two markers.
pub fn locate_markers(lines: &[String]) -> Result<MarkerSpan, ParseError> {
    let mut start = None;
    let mut end = None;
    for (i, line) in lines.iter().enumerate() {
        let lowered = line.to_lowercase();
        if lowered.contains(START_MARKER) {
            start = Some(i);
        }
        if end.is_none() && lowered.contains(END_MARKER) {
            end = Some(i);
        }
    }

    let start = start.ok_or(ParseError::NoStartMarker)?;
    let end = end.ok_or(ParseError::NoEndMarker)?;
    if start >= end {
        return Err(ParseError::MarkerOrder);
    }
    Ok(MarkerSpan { start, end })
}
