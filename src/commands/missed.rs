//! Missed words command
//!
//! Scans the whole dictionary for words the board allows and reports the ones
//! the player did not submit.

use super::check::normalize_submissions;
use crate::classifier::Classifier;
use crate::core::Grid;
use crate::scoring::ScoredWord;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeSet;
use tracing::{info, instrument};

/// Words on the board that the player did not find
pub struct MissedResult {
    /// Every dictionary word the board allows
    pub available: usize,
    /// Allowed words not among the submissions, sorted
    pub missed: Vec<ScoredWord>,
    /// Points left on the table
    pub missed_points: u32,
}

/// Find every dictionary word on `board` that is not in `submitted`
///
/// `submitted` is normalized the same way `check` normalizes submissions.
#[instrument(skip_all, fields(dictionary = classifier.dictionary().len()))]
pub fn find_missed(
    classifier: &Classifier,
    board: &Grid,
    submitted: &[String],
    show_progress: bool,
) -> MissedResult {
    let candidates: Vec<&str> = classifier.dictionary().iter().collect();

    let pb = if show_progress {
        ProgressBar::new(candidates.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("scanning dictionary");

    let matcher = classifier.matcher();
    let on_board: BTreeSet<&str> = candidates
        .par_iter()
        .filter(|&&word| {
            pb.inc(1);
            matcher.matches(board, word)
        })
        .copied()
        .collect();
    pb.finish_and_clear();

    let submitted: BTreeSet<String> = normalize_submissions(submitted).into_iter().collect();
    let missed: Vec<ScoredWord> = on_board
        .iter()
        .filter(|word| !submitted.contains(**word))
        .map(|&word| ScoredWord::new(word))
        .collect();
    let missed_points = missed.iter().map(|scored| scored.score).sum();

    info!(available = on_board.len(), missed = missed.len(), "Dictionary scan done");

    MissedResult {
        available: on_board.len(),
        missed,
        missed_points,
    }
}
