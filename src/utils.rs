//! Utility functions for string processing.

/// Split text into lowercase terms.
///
/// A term is a maximal run of word characters (Unicode alphanumerics and `_`)
/// that is at least two characters long. Single characters are dropped, so
/// "7-day" yields only "day".
pub fn tokenize(value: &str) -> Vec<String> {
    value
        .to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|token| token.chars().nth(1).is_some())
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Cut `value` to at most `max_chars` Unicode scalar values.
///
/// Counts characters, not bytes, so multi-byte text is never split inside a
/// code point. No ellipsis is appended.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => &value[..byte_offset],
        None => value,
    }
}
