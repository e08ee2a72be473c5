//! Line splitting for SDP bodies

/// SDP line terminator
pub const LINE_TERMINATOR: &str = "\r\n";

/// Split a raw description body into logical lines.
///
/// Splits on `\r\n` only. A single trailing empty element, produced when the
/// body ends with a terminator, is dropped. No trimming is applied, so a bare
/// `\n` stays inside the line it appears in.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<&str> = text.split(LINE_TERMINATOR).collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines
}
