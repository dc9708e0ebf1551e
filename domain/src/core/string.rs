//! String utilities for the domain layer.

/// Single-line preview of a text for log messages.
///
/// Newlines are folded into spaces and the result is cut to `max_chars`
/// characters with a trailing ellipsis.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() <= max_chars {
        flat
    } else {
        let kept: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
