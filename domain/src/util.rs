//! Shared utility functions.

/// Build a single-line preview of `s` for log output.
///
/// Newlines are folded into spaces and the result is cut to at most
/// `max_chars` characters, with `...` appended when anything was dropped.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let kept: String = flat.chars().take(max_chars).collect();
    format!("{}...", kept)
}
