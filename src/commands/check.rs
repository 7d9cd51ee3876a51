//! Word checking command
//!
//! Judges a player's submitted words against a board and dictionary.

use crate::classifier::{Classification, Classifier};
use crate::core::{Grid, GridError, Position, Word};
use crate::scoring::ScoreSheet;

/// Configuration for checking a batch of words
pub struct CheckConfig {
    pub board: Grid,
    pub words: Vec<String>,
    pub show_paths: bool,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(board: Grid, words: Vec<String>) -> Self {
        Self {
            board,
            words,
            show_paths: false,
        }
    }
}

/// Result of checking a batch of words
pub struct CheckResult {
    pub board: Grid,
    pub classification: Classification,
    pub scores: ScoreSheet,
    /// Witness path per accepted word, filled when paths were requested
    pub paths: Vec<(String, Vec<Position>)>,
}

/// Uppercase a raw submission
///
/// Submissions that are not a run of letters keep their (uppercased) text so
/// they still show up as rejected. Blank submissions are dropped.
#[must_use]
pub fn normalize_submissions(raw: &[String]) -> Vec<String> {
    raw.iter()
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            Word::new(entry).map_or_else(|_| entry.trim().to_uppercase(), Word::into_string)
        })
        .collect()
}

/// Classify and score the submitted words
///
/// # Errors
///
/// Returns an error if the board fails the shape check.
pub fn check_words(config: CheckConfig, classifier: &Classifier) -> Result<CheckResult, GridError> {
    let words = normalize_submissions(&config.words);
    let classification = classifier.classify(&words, &config.board)?;
    let scores = classification.score_sheet();

    let paths = if config.show_paths {
        classification
            .accepted
            .iter()
            .filter_map(|word| {
                classifier
                    .matcher()
                    .trace(&config.board, word)
                    .map(|path| (word.clone(), path))
            })
            .collect()
    } else {
        Vec::new()
    };

    Ok(CheckResult {
        board: config.board,
        classification,
        scores,
        paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::PathMatcher;
    use crate::wordlists::Dictionary;

    fn setup() -> (Grid, Classifier) {
        let grid: Grid = "GDIW/NTEM/TAFC/ERIJ".parse().unwrap();
        let dictionary = Dictionary::from_words(["FANG", "MEAT", "CRANE", "GIRD", "TRADE"]);
        (grid, Classifier::new(dictionary, PathMatcher::default()))
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn normalize_uppercases_and_drops_blanks() {
        let normalized = normalize_submissions(&strings(&["fang", " meat ", "", "  ", "x-ray"]));
        assert_eq!(normalized, strings(&["FANG", "MEAT", "X-RAY"]));
    }

    #[test]
    fn check_scores_accepted_words() {
        let (grid, classifier) = setup();
        let config = CheckConfig::new(grid, strings(&["fang", "meat", "crane", "gird", "fang"]));

        let result = check_words(config, &classifier).unwrap();

        assert_eq!(result.classification.accepted.len(), 2);
        assert_eq!(result.classification.rejected.len(), 2);
        assert_eq!(result.scores.total, 2);
        assert!(result.paths.is_empty());
    }

    #[test]
    fn check_with_paths() {
        let (grid, classifier) = setup();
        let mut config = CheckConfig::new(grid, strings(&["FANG", "GIRD"]));
        config.show_paths = true;

        let result = check_words(config, &classifier).unwrap();

        assert_eq!(result.paths.len(), 1);
        let (word, path) = &result.paths[0];
        assert_eq!(word, "FANG");
        assert_eq!(path.first(), Some(&Position::new(2, 2)));
        assert_eq!(path.last(), Some(&Position::new(0, 0)));
    }

    #[test]
    fn malformed_submission_is_rejected_not_an_error() {
        let (grid, classifier) = setup();
        let config = CheckConfig::new(grid, strings(&["fa ng", "don't"]));

        let result = check_words(config, &classifier).unwrap();

        assert!(result.classification.accepted.is_empty());
        assert!(result.classification.rejected.contains("FA NG"));
        assert!(result.classification.rejected.contains("DON'T"));
        assert_eq!(result.scores.total, 0);
    }
}
