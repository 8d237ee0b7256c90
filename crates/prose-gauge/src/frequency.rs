//! Word-frequency tables and their filtered/sorted views.

use std::collections::{HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single word/count pair in a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyEntry {
    /// The word, exactly as tokenized (already lowercase).
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Occurrence counts keyed by exact word string.
///
/// Entries stay in first-appearance order; [`FrequencyTable::sorted`] and
/// [`FrequencyTable::top`] are views and never reorder the stored table,
/// so ties always break toward the word that appeared first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Count occurrences over an ordered word sequence.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<FrequencyEntry> = Vec::new();
        for word in words {
            let word = word.as_ref();
            if let Some(&at) = index.get(word) {
                entries[at].count += 1;
            } else {
                index.insert(word.to_string(), entries.len());
                entries.push(FrequencyEntry {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
        Self { entries }
    }

    /// Entries whose word is absent from `set` (stop-word removal).
    pub fn without(&self, set: &HashSet<String>) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| !set.contains(&e.word))
                .cloned()
                .collect(),
        }
    }

    /// Entries whose word is present in `set`.
    pub fn only(&self, set: &HashSet<String>) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| set.contains(&e.word))
                .cloned()
                .collect(),
        }
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences across all entries.
    pub fn occurrences(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Occurrence count for a word, if present.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.count)
    }

    /// Iterate entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    /// Descending-by-count view. The sort is stable: equal counts keep
    /// their first-appearance order.
    pub fn sorted(&self) -> Vec<FrequencyEntry> {
        let mut view = self.entries.clone();
        view.sort_by(|a, b| b.count.cmp(&a.count));
        view
    }

    /// The `n` highest-count entries (all of them when `n` exceeds the
    /// table size), ordered as in [`FrequencyTable::sorted`].
    pub fn top(&self, n: usize) -> Vec<FrequencyEntry> {
        let mut view = self.sorted();
        view.truncate(n);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(words: &[&str]) -> FrequencyTable {
        FrequencyTable::from_words(words.iter().copied())
    }

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn counts_occurrences() {
        let t = table(&["a", "b", "a", "c", "a", "b"]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.occurrences(), 6);
        assert_eq!(t.get("a"), Some(3));
        assert_eq!(t.get("b"), Some(2));
        assert_eq!(t.get("missing"), None);
    }

    #[test]
    fn sorted_is_descending_and_stable() {
        // "two" and "too" tie at 2; "two" appeared first and must stay first.
        let t = table(&["two", "too", "three", "two", "too", "three", "three"]);
        let sorted = t.sorted();
        assert_eq!(sorted[0].word, "three");
        assert_eq!(sorted[1].word, "two");
        assert_eq!(sorted[2].word, "too");
    }

    #[test]
    fn sorted_does_not_mutate_table() {
        let t = table(&["b", "a", "a"]);
        let _ = t.sorted();
        let order: Vec<&str> = t.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn top_truncates() {
        let t = table(&["a", "a", "b", "c"]);
        assert_eq!(t.top(1).len(), 1);
        assert_eq!(t.top(1)[0].word, "a");
        assert_eq!(t.top(10).len(), 3);
        assert!(t.top(0).is_empty());
    }

    #[test]
    fn without_excludes_set_members() {
        let t = table(&["the", "cat", "the", "mat"]);
        let abridged = t.without(&set(&["the"]));
        assert_eq!(abridged.len(), 2);
        assert_eq!(abridged.get("the"), None);
        assert_eq!(abridged.get("cat"), Some(1));
    }

    #[test]
    fn only_keeps_set_members() {
        let t = table(&["i", "saw", "you", "i"]);
        let pronouns = t.only(&set(&["i", "you", "they"]));
        assert_eq!(pronouns.len(), 2);
        assert_eq!(pronouns.get("i"), Some(2));
        assert_eq!(pronouns.occurrences(), 3);
    }

    #[test]
    fn empty_table() {
        let t = FrequencyTable::from_words(Vec::<String>::new());
        assert!(t.is_empty());
        assert_eq!(t.occurrences(), 0);
        assert!(t.sorted().is_empty());
    }
}
