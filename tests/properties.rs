//! Property tests for path matching, classification and scoring.

use boggle_judge::classifier::Classifier;
use boggle_judge::core::{Grid, GridError};
use boggle_judge::matcher::PathMatcher;
use boggle_judge::scoring::score;
use boggle_judge::wordlists::Dictionary;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Square grid over a small alphabet so that random words often match.
fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..=5).prop_flat_map(|size| {
        prop::collection::vec(prop::sample::select(vec!['A', 'B', 'C', 'D', 'E']), size * size)
            .prop_map(move |cells| Grid::new(cells, size).unwrap())
    })
}

fn word_strategy() -> impl Strategy<Value = String> {
    "[A-F]{1,6}"
}

fn batch_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..24)
}

proptest! {
    #[test]
    fn matching_is_deterministic(grid in grid_strategy(), word in word_strategy()) {
        let matcher = PathMatcher::default();
        let first = matcher.matches(&grid, &word);
        // Unrelated calls in between must not influence the answer
        let _ = matcher.matches(&grid, "ABCDE");
        prop_assert_eq!(matcher.matches(&grid, &word), first);
    }

    #[test]
    fn trace_exists_exactly_when_matching(
        grid in grid_strategy(),
        word in word_strategy(),
        allow_revisit in any::<bool>(),
    ) {
        let matcher = PathMatcher::new(allow_revisit);
        let path = matcher.trace(&grid, &word);
        prop_assert_eq!(path.is_some(), matcher.matches(&grid, &word));

        if let Some(path) = path {
            let spelled: String = path.iter().filter_map(|&p| grid.at(p)).collect();
            prop_assert_eq!(spelled, word);
            for pair in path.windows(2) {
                prop_assert!(pair[0].is_adjacent(pair[1]));
            }
            if !allow_revisit {
                let distinct: BTreeSet<_> = path.iter().collect();
                prop_assert_eq!(distinct.len(), path.len());
            }
        }
    }

    #[test]
    fn strict_is_never_more_permissive(grid in grid_strategy(), word in word_strategy()) {
        if PathMatcher::strict().matches(&grid, &word) {
            prop_assert!(PathMatcher::default().matches(&grid, &word));
        }
    }

    #[test]
    fn classification_partitions_distinct_input(
        grid in grid_strategy(),
        batch in batch_strategy(),
        known in batch_strategy(),
        allow_revisit in any::<bool>(),
    ) {
        let dictionary = Dictionary::from_words(batch.iter().step_by(2).chain(&known));
        let classifier = Classifier::new(dictionary, PathMatcher::new(allow_revisit));
        let result = classifier.classify(&batch, &grid).unwrap();

        let distinct: BTreeSet<String> = batch.iter().cloned().collect();
        let union: BTreeSet<String> = result.accepted.union(&result.rejected).cloned().collect();
        prop_assert_eq!(union, distinct);
        prop_assert!(result.accepted.is_disjoint(&result.rejected));
        prop_assert!(result.dictionary_hits >= result.accepted.len());
    }

    #[test]
    fn accepted_words_are_valid(grid in grid_strategy(), batch in batch_strategy()) {
        let dictionary = Dictionary::from_words(&batch);
        let classifier = Classifier::new(dictionary.clone(), PathMatcher::default());
        let result = classifier.classify(&batch, &grid).unwrap();

        for word in &result.accepted {
            prop_assert!(dictionary.contains(word));
            prop_assert!(PathMatcher::default().matches(&grid, word));
        }
        for word in &result.rejected {
            prop_assert!(!dictionary.contains(word) || !PathMatcher::default().matches(&grid, word));
        }
    }

    #[test]
    fn reclassifying_accepted_is_idempotent(grid in grid_strategy(), batch in batch_strategy()) {
        let classifier = Classifier::new(Dictionary::from_words(&batch), PathMatcher::default());
        let first = classifier.classify(&batch, &grid).unwrap();

        let accepted: Vec<&str> = first.accepted.iter().map(String::as_str).collect();
        let second = classifier.classify(&accepted, &grid).unwrap();
        prop_assert_eq!(second.accepted, first.accepted);
    }

    #[test]
    fn batch_order_does_not_matter(grid in grid_strategy(), batch in batch_strategy()) {
        let classifier = Classifier::new(Dictionary::from_words(&batch), PathMatcher::default());
        let mut reversed = batch.clone();
        reversed.reverse();

        prop_assert_eq!(
            classifier.classify(&batch, &grid).unwrap(),
            classifier.classify(&reversed, &grid).unwrap()
        );
    }

    #[test]
    fn longer_words_score_more_from_five_letters(a in 5usize..40, b in 5usize..40) {
        prop_assume!(a < b);
        prop_assert!(score(&"A".repeat(a)) < score(&"A".repeat(b)));
    }

    #[test]
    fn mismatched_cell_count_is_invalid_grid(size in 1usize..6, extra in 1usize..6) {
        let cells = vec!['A'; size * size + extra];
        prop_assert_eq!(
            Grid::new(cells, size),
            Err(GridError::InvalidGrid { size, cells: size * size + extra })
        );
    }
}

#[test]
fn score_boundaries() {
    assert_eq!(score("AT"), 0);
    assert_eq!(score("TEA"), 1);
    assert_eq!(score("TEAR"), 1);
    assert_eq!(score("CRANE"), 2);
    assert_eq!(score("TRAINED"), 4);
}

#[test]
fn fang_board_scenario() {
    let grid = Grid::new("GDIWNTEMTAFCERIJ".chars().collect(), 4).unwrap();
    let classifier = Classifier::new(
        Dictionary::from_words(["FANG", "GIRD"]),
        PathMatcher::default(),
    );

    let fang = classifier.classify(&["FANG"], &grid).unwrap();
    assert!(fang.accepted.contains("FANG"));

    let unknown = classifier.classify(&["ZZZZ"], &grid).unwrap();
    assert_eq!(unknown.dictionary_hits, 0);
    assert!(unknown.rejected.contains("ZZZZ"));

    let off_board = classifier.classify(&["GIRD"], &grid).unwrap();
    assert_eq!(off_board.dictionary_hits, 1);
    assert!(off_board.accepted.is_empty());
}
