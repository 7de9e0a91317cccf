//! Avatar key validation.

/// True when every character of `text` is URL-unreserved (`A-Z a-z 0-9 . _ ~ -`),
/// i.e. the text can be placed in a URL path without escaping.
pub fn is_url_safe(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '~' | '-'))
}

/// True when `key` has at least one non-whitespace character.
pub fn is_non_blank(key: &str) -> bool {
    !key.trim().is_empty()
}
