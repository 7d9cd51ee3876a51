//! Word classification
//!
//! Filters submitted words through the dictionary, then through the adjacency
//! path check, producing sorted accepted and rejected sets.

mod engine;

pub use engine::{Classification, Classifier};

use crate::core::{GridError, LetterBoard};
use crate::matcher::PathMatcher;
use crate::wordlists::Dictionary;

/// Classify `words` with the default (revisit-allowed) path rule
///
/// # Errors
/// Returns `GridError::InvalidGrid` if the board is malformed.
///
/// # Examples
/// ```
/// use boggle_judge::classifier::classify;
/// use boggle_judge::core::Grid;
/// use boggle_judge::wordlists::Dictionary;
///
/// let grid: Grid = "GDIW/NTEM/TAFC/ERIJ".parse().unwrap();
/// let dictionary = Dictionary::from_words(["FANG", "GIRD"]);
///
/// let result = classify(&["FANG", "GIRD", "ZZZZ"], &dictionary, &grid).unwrap();
/// assert_eq!(result.accepted.iter().collect::<Vec<_>>(), ["FANG"]);
/// assert_eq!(result.rejected.iter().collect::<Vec<_>>(), ["GIRD", "ZZZZ"]);
/// ```
pub fn classify<B, S>(
    words: &[S],
    dictionary: &Dictionary,
    board: &B,
) -> Result<Classification, GridError>
where
    B: LetterBoard + Sync + ?Sized,
    S: AsRef<str>,
{
    Classifier::new(dictionary.clone(), PathMatcher::default()).classify(words, board)
}
