// src/core/analyzer/sentence.rs
use regex::Regex;
use std::sync::LazyLock;

static TERMINATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]").expect("valid regex"));

/// Splits `text` into sentences on `.`, `!` and `?`.
///
/// Each piece is trimmed and empty pieces are dropped, so runs like `...` or
/// `?!` never yield empty sentences. Trailing text without a terminator is
/// still a sentence.
#[must_use]
pub fn extract_sentences(text: &str) -> Vec<&str> {
    TERMINATOR_PATTERN
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}
