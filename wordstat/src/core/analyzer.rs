// src/core/analyzer.rs
pub mod sentence;
pub mod tokenizer;

use crate::models::{TextStats, WordFrequencyTable};
use sentence::extract_sentences;
use tokenizer::extract_words;

/// Number of entries reported in `most_common_words` unless configured otherwise.
pub const DEFAULT_TOP_WORDS_COUNT: usize = 10;

/// Computes word and sentence statistics for in-memory text.
///
/// The analyzer holds no state besides its top-N setting, so one instance can
/// be reused for any number of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAnalyzer {
    top_words: usize,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_WORDS_COUNT)
    }
}

impl TextAnalyzer {
    #[inline]
    #[must_use]
    pub const fn new(top_words: usize) -> Self {
        Self { top_words }
    }

    #[inline]
    #[must_use]
    pub const fn top_words(&self) -> usize {
        self.top_words
    }

    /// Analyzes `text` and returns its statistics along with the full
    /// frequency table.
    ///
    /// # Arguments
    ///
    /// * `text` - Any string, including an empty one
    ///
    /// # Returns
    ///
    /// * `TextStats` - Totals, average sentence length and the top-N words
    /// * `WordFrequencyTable` - Counts for every word, not only the top-N
    ///
    /// The average sentence length is `0.0` when the text has no sentences.
    #[must_use]
    pub fn analyze(&self, text: &str) -> (TextStats, WordFrequencyTable) {
        let word_count: WordFrequencyTable = extract_words(text).into_iter().collect();

        let sentence_lengths: Vec<usize> = extract_sentences(text)
            .into_iter()
            .map(|sentence| extract_words(sentence).len())
            .collect();

        let stats = TextStats {
            total_words: word_count.total(),
            unique_words: word_count.len(),
            average_sentence_length: mean(&sentence_lengths),
            most_common_words: word_count.most_common(self.top_words),
        };

        (stats, word_count)
    }
}

/// Analyzes `text` with the default top-N.
#[inline]
#[must_use]
pub fn analyze(text: &str) -> (TextStats, WordFrequencyTable) {
    TextAnalyzer::default().analyze(text)
}

fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum = values.iter().fold(0_usize, |acc, v| acc.saturating_add(*v));
    sum as f64 / values.len() as f64
}
