//! Terminal output sanitization
//!
//! File names come straight from the filesystem and may contain ANSI escape
//! sequences or other control characters. Anything echoed to the terminal
//! goes through [`sanitize_for_terminal`] first. The report file keeps the
//! raw names.

use std::borrow::Cow;

/// Strips ANSI CSI sequences and control characters from a string
///
/// Tabs are kept; newlines and carriage returns are removed so one path
/// always occupies one output line.
///
/// # Examples
///
/// ```
/// use file_search_engine::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mred.txt\x1b[0m"), "red.txt");
/// assert_eq!(sanitize_for_terminal("plain.txt"), "plain.txt");
/// ```
pub fn sanitize_for_terminal(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.is_control() && c != '\t') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI sequence ends at the first letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' {
            continue;
        }

        result.push(ch);
    }

    Cow::Owned(result)
}
