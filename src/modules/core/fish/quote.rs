//! Fish quoting

use std::borrow::Cow;

/// Escape text for use inside a fish single-quoted string.
///
/// Inside single quotes fish only interprets `\\` and `\'`.
pub fn escape_single_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap text in single quotes, escaping as needed
pub fn single_quoted(text: &str) -> String {
    format!("'{}'", escape_single_quoted(text))
}

/// Single-quoted description text collapsed onto one line
pub fn description(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .collect();
    single_quoted(flat.trim())
}

/// A bare word when it is safe unquoted, otherwise a single-quoted literal
pub fn word(text: &str) -> Cow<'_, str> {
    let safe = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+' | ':' | '/' | '@' | '=' | ','));
    if safe {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(single_quoted(text))
    }
}
