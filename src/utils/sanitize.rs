//! Utilities for sanitizing backend-provided text before it reaches the terminal.
//!
//! Tag contents, titles and audit descriptions are arbitrary strings from the
//! analyzed page. They are printed as-is except for control characters, which
//! could otherwise inject terminal escape sequences.

/// Removes control characters from text destined for the terminal.
///
/// Keeps newlines and tabs; removes every other C0 control character, DEL,
/// and C1 control characters (which include the 8-bit CSI).
pub fn sanitize_display_text(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\n' || *c == '\t' || !c.is_control())
        .collect()
}

/// Sanitizes and collapses text onto a single line.
pub fn sanitize_single_line(text: &str) -> String {
    sanitize_display_text(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates text to at most `max_chars` characters, appending `…` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
