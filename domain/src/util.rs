//! Shared text helpers.

/// Cut `s` to at most `max_bytes`, backing off to a UTF-8 boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview for log messages: newlines folded, `...` appended
/// when cut.
pub fn preview(s: &str, max_bytes: usize) -> String {
    let folded = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let cut = truncate_str(&folded, max_bytes);
    if cut.len() < folded.len() {
        format!("{}...", cut)
    } else {
        folded
    }
}
