//! Batch word classification

use crate::core::{GridError, LetterBoard, validate_board};
use crate::matcher::PathMatcher;
use crate::scoring::ScoreSheet;
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Outcome of classifying one batch of submitted words
///
/// `accepted` and `rejected` are disjoint, sorted, and together hold every
/// distinct submitted word exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub accepted: BTreeSet<String>,
    pub rejected: BTreeSet<String>,
    /// Distinct words that passed the dictionary filter
    pub dictionary_hits: usize,
}

impl Classification {
    /// Score the accepted words
    #[must_use]
    pub fn score_sheet(&self) -> ScoreSheet {
        ScoreSheet::from_words(self.accepted.iter().cloned())
    }

    /// Number of distinct words classified
    #[must_use]
    pub fn len(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}

/// Word classifier
///
/// Holds the shared dictionary handle and the path matching rule.
#[derive(Debug, Clone)]
pub struct Classifier {
    dictionary: Dictionary,
    matcher: PathMatcher,
}

impl Classifier {
    /// Create a classifier
    ///
    /// # Parameters
    /// - `dictionary`: Accepted words (shared, read-only)
    /// - `matcher`: Path rule for the geometry check
    #[must_use]
    pub const fn new(dictionary: Dictionary, matcher: PathMatcher) -> Self {
        Self {
            dictionary,
            matcher,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn matcher(&self) -> PathMatcher {
        self.matcher
    }

    /// Split a batch of uppercase words into accepted and rejected
    ///
    /// Duplicates collapse. Words missing from the dictionary are rejected
    /// without a path check; dictionary words are then checked against the
    /// board in parallel.
    ///
    /// # Errors
    /// Returns `GridError::InvalidGrid` if the board is not a non-empty square;
    /// no partial result is produced.
    #[instrument(skip_all, fields(submitted = words.len()))]
    pub fn classify<B, S>(&self, words: &[S], board: &B) -> Result<Classification, GridError>
    where
        B: LetterBoard + Sync + ?Sized,
        S: AsRef<str>,
    {
        validate_board(board)?;

        let distinct: BTreeSet<&str> = words.iter().map(|word| word.as_ref()).collect();

        // Dictionary filter
        let (in_dict, not_in_dict): (Vec<&str>, Vec<&str>) = distinct
            .into_iter()
            .partition(|word| self.dictionary.contains(word));
        debug!(
            in_dictionary = in_dict.len(),
            unknown = not_in_dict.len(),
            "Dictionary filter done"
        );

        // Geometry filter
        let checked: Vec<(&str, bool)> = in_dict
            .par_iter()
            .map(|&word| (word, self.matcher.matches(board, word)))
            .collect();

        let mut accepted = BTreeSet::new();
        let mut rejected: BTreeSet<String> =
            not_in_dict.into_iter().map(str::to_string).collect();
        for (word, on_board) in checked {
            if on_board {
                accepted.insert(word.to_string());
            } else {
                rejected.insert(word.to_string());
            }
        }
        debug!(
            accepted = accepted.len(),
            rejected = rejected.len(),
            "Path filter done"
        );

        Ok(Classification {
            accepted,
            rejected,
            dictionary_hits: in_dict.len(),
        })
    }
}
