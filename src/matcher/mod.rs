//! Adjacency path matching
//!
//! Decides whether a word can be spelled by stepping between 8-way adjacent
//! cells of a letter board, one letter per step.
//!
//! # Cell reuse
//! The historical rule tracks which cells are *reachable* at each letter and
//! never marks a cell as used, so `ABA` is accepted on a board where one `A`
//! touches one `B`. That behaviour is kept as the default for compatibility
//! until the product rule is settled. [`PathMatcher::strict`] switches to
//! paths in which every cell appears at most once.

mod distinct;
mod reachable;

use crate::core::{LetterBoard, Position, validate_board};

/// Word path matcher over any [`LetterBoard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathMatcher {
    allow_revisit: bool,
}

impl PathMatcher {
    /// Create a matcher
    ///
    /// # Parameters
    /// - `allow_revisit`: let a path pass through the same cell more than once
    ///   (historical behaviour, default `true`)
    #[must_use]
    pub const fn new(allow_revisit: bool) -> Self {
        Self { allow_revisit }
    }

    /// Matcher that uses every cell at most once per word
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn allows_revisit(self) -> bool {
        self.allow_revisit
    }

    /// Check whether `word` traces a path of adjacent cells on `board`
    ///
    /// `word` is expected in uppercase. Returns `false` for an empty word, for
    /// a word using a letter missing from the board, and for a malformed board.
    ///
    /// # Examples
    /// ```
    /// use boggle_judge::core::Grid;
    /// use boggle_judge::matcher::PathMatcher;
    ///
    /// let grid: Grid = "GDIW/NTEM/TAFC/ERIJ".parse().unwrap();
    /// let matcher = PathMatcher::default();
    ///
    /// assert!(matcher.matches(&grid, "FANG"));
    /// assert!(!matcher.matches(&grid, "GIRD")); // letters present, not adjacent
    /// ```
    pub fn matches<B: LetterBoard + ?Sized>(&self, board: &B, word: &str) -> bool {
        if validate_board(board).is_err() {
            return false;
        }

        if self.allow_revisit {
            reachable::matches(board, word)
        } else {
            distinct::trace(board, word).is_some()
        }
    }

    /// Find one path of positions spelling `word`
    ///
    /// Returns `Some` exactly when [`matches`](Self::matches) returns `true`.
    pub fn trace<B: LetterBoard + ?Sized>(&self, board: &B, word: &str) -> Option<Vec<Position>> {
        validate_board(board).ok()?;

        if self.allow_revisit {
            reachable::trace(board, word)
        } else {
            distinct::trace(board, word)
        }
    }
}

impl Default for PathMatcher {
    fn default() -> Self {
        Self::new(true)
    }
}
