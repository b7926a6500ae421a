//! Cursor-adjacency predicates derived from the text before the cursor.
//!
//! Hosts that expose these predicates directly can skip this module and
//! fill [`InputContext`](crate::InputContext) themselves.

use crate::settings::DocumentSettings;

/// True when the cursor starts a new sentence: no text, only spaces, or the
/// text (trailing spaces and tabs trimmed) ends with a sentence delimiter.
pub fn is_cursor_at_new_sentence(before: Option<&str>, rules: &DocumentSettings) -> bool {
    let Some(before) = before else {
        return true;
    };
    match before.trim_end_matches([' ', '\t']).chars().last() {
        None => true,
        Some(c) => rules.is_sentence_delimiter(c),
    }
}

/// Like [`is_cursor_at_new_sentence`], but also requires whitespace between
/// the delimiter and the cursor, so `"Hi."` is not a new sentence yet while
/// `"Hi. "` is.
pub fn is_cursor_at_new_sentence_with_trailing_whitespace(
    before: Option<&str>,
    rules: &DocumentSettings,
) -> bool {
    if !is_cursor_at_new_sentence(before, rules) {
        return false;
    }
    match before.and_then(|b| b.chars().last()) {
        None => true,
        Some(c) => c.is_whitespace(),
    }
}

/// True when the cursor follows a word boundary (or there is no text).
pub fn is_cursor_at_new_word(before: Option<&str>, rules: &DocumentSettings) -> bool {
    match before.and_then(|b| b.chars().last()) {
        None => true,
        Some(c) => rules.is_word_delimiter(c),
    }
}

/// True when `before` ends with exactly one space.
///
/// Two or more trailing spaces do not count: a double space is the
/// end-of-sentence convention, not a space after a number or symbol.
pub fn ends_with_single_space(before: &str) -> bool {
    before.ends_with(' ') && !before.ends_with("  ")
}
