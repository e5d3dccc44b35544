//! Word frequency table in first-seen order.

use indexmap::IndexMap;

/// Distinct words and how often each occurred, in the order they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: IndexMap<String, usize>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`. Empty words are ignored.
    pub fn record(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        match self.counts.get_mut(word) {
            Some(n) => *n += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
    }

    /// Occurrences of `word` (0 if never seen).
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of words counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(word, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, n)| (w.as_str(), *n))
    }
}
