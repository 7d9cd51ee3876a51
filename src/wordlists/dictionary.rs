//! Shared accepted-word set
//!
//! Loaded once at startup and never mutated afterwards. Clones share the same
//! underlying set, so one handle can be passed to every classifier.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Immutable set of accepted uppercase words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Arc<FxHashSet<String>>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are normalized with [`Word::new`]; entries that are not a
    /// single run of letters are skipped.
    ///
    /// # Examples
    /// ```
    /// use boggle_judge::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["fang", "Tea", "don't", ""]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("FANG"));
    /// assert!(dictionary.contains("TEA"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|entry| Word::new(entry).ok())
            .map(Word::into_string)
            .collect();

        Self {
            words: Arc::new(words),
        }
    }

    /// Dictionary backed by the embedded [`STARTER`](super::STARTER) list
    #[must_use]
    pub fn starter() -> Self {
        Self::from_words(super::STARTER)
    }

    /// Check whether an (uppercase) word is accepted
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
