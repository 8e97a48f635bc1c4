// src/models/text_stats.rs
use serde::{Deserialize, Serialize};

/// Summary statistics for one analysed document.
///
/// This is the record written to disk by the report writer; field names are
/// part of the output format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub total_words: usize,
    pub unique_words: usize,
    pub average_sentence_length: f64,
    pub most_common_words: Vec<(String, usize)>,
}

impl TextStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_words: 0,
            unique_words: 0,
            average_sentence_length: 0.0,
            most_common_words: Vec::new(),
        }
    }
}
