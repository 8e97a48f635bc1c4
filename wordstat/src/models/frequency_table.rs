// src/models/frequency_table.rs
use std::collections::HashMap;

/// Occurrence counts for every token in a document.
///
/// Entries keep first-seen order, which is what breaks ties when ranking.
/// The table is built in one pass from a token stream and cannot be changed
/// afterwards; the stats report and the chart both derive their top-N views
/// from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordFrequencyTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `word`, or 0 if it never occurred.
    #[must_use]
    pub fn get(&self, word: &str) -> usize {
        self.index
            .get(word)
            .and_then(|&slot| self.entries.get(slot))
            .map_or(0, |(_, count)| *count)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries
            .iter()
            .fold(0_usize, |acc, (_, count)| acc.saturating_add(*count))
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
    }

    /// The `n` most frequent words, highest count first.
    ///
    /// Words with equal counts keep the order in which they were first seen.
    /// Returns every entry when the table holds fewer than `n` words.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        // stable sort keeps first-seen order among ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for WordFrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut entries: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for word in iter {
            let word = word.into();
            if let Some(entry) = index.get(&word).and_then(|&slot| entries.get_mut(slot)) {
                entry.1 = entry.1.saturating_add(1);
            } else {
                index.insert(word.clone(), entries.len());
                entries.push((word, 1));
            }
        }

        Self { entries, index }
    }
}
