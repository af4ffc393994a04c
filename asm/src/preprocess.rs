//! Comment stripping and blank-line removal, run ahead of the pest parse.
//!
//! Kept as its own pass (rather than folded into the grammar) so the grammar stays focused on
//! instruction syntax and this step is independently testable, the same separation the
//! original compiler's own comment pre-pass used.

/// Strips a trailing `#`-comment and blank lines, returning the surviving lines paired with
/// their 1-based source line number (for diagnostics).
pub fn strip_comments_and_blanks(source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let code = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };
            let trimmed = code.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some((i + 1, trimmed.to_string()))
            }
        })
        .collect()
}
