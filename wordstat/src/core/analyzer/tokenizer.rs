// src/core/analyzer/tokenizer.rs
use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of Unicode letters, numbers and underscores.
///
/// Combining marks and connector punctuation other than `_` split words.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("valid regex"));

/// Splits `text` into lowercase word tokens, left to right.
///
/// Punctuation and whitespace only separate tokens. Repeated words stay
/// repeated; the result is a token stream, not a set.
#[must_use]
pub fn extract_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_owned())
        .collect()
}
