//! String utilities for the domain layer.

/// First non-blank line of `s`, cut to `max_len` bytes with an ellipsis.
///
/// Truncation always lands on a UTF-8 character boundary.
pub fn first_line_preview(s: &str, max_len: usize) -> String {
    let line = s.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    if line.len() <= max_len {
        line.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(line.len());
        while end > 0 && !line.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &line[..end])
    }
}
