//! Core domain types for Boggle judging
//!
//! This module contains the grid, position and word types shared by the matcher,
//! classifier and scorer. All types here are pure and immutable once built.

mod grid;
mod word;

pub use grid::{Grid, GridError, LetterBoard, Position, validate_board};
pub use word::{Word, WordError};
