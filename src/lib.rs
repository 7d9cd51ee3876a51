//! Boggle Judge
//!
//! Validates submitted words against a dictionary and a letter grid: a word is
//! accepted when it is in the dictionary and its letters trace a chain of
//! 8-way adjacent cells. Accepted words are scored with the classic table.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_judge::classifier::classify;
//! use boggle_judge::core::Grid;
//! use boggle_judge::wordlists::Dictionary;
//!
//! let grid: Grid = "GDIW/NTEM/TAFC/ERIJ".parse().unwrap();
//! let dictionary = Dictionary::from_words(["FANG", "MEAT", "ZEBRA"]);
//!
//! let result = classify(&["FANG", "MEAT", "ZEBRA"], &dictionary, &grid).unwrap();
//! assert_eq!(result.accepted.len(), 2);
//! assert_eq!(result.score_sheet().total, 2);
//! ```

// Core domain types
pub mod core;

// Adjacency path matching
pub mod matcher;

// Dictionary and path filtering
pub mod classifier;

// Word scores
pub mod scoring;

// Word lists
pub mod wordlists;

// Board production
pub mod board;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
