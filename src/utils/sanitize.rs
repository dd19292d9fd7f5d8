//! Utilities for sanitizing untrusted text before it is echoed back.
//!
//! The verdict page repeats the submitted URL, so it must be escaped for HTML.
//! Log lines carry URLs too, so control characters are stripped from them.

/// Escapes text for safe inclusion in HTML element content or quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Removes control characters (0x00-0x1F and 0x7F) from a string.
///
/// Submitted URLs can carry CR/LF; stripping them keeps one log record per line.
pub fn strip_control_chars(input: &str) -> String {
    input.chars().filter(|c| !c.is_control()).collect()
}
