//! Distinct-cell path search
//!
//! Depth-first backtracking in which every cell is used at most once per path.

use super::reachable;
use crate::core::{LetterBoard, Position};
use rustc_hash::FxHashMap;

/// Find a path spelling `word` that never revisits a cell
///
/// The search itself is exponential in the worst case, so words that cannot
/// fit are turned away first: too long for the board, needing a letter more
/// often than the board holds it, or failing the reachable-set check (a
/// distinct-cell path is always a reachable-set path).
pub fn trace<B: LetterBoard + ?Sized>(board: &B, word: &str) -> Option<Vec<Position>> {
    let letters: Vec<char> = word.chars().collect();
    let (&first, rest) = letters.split_first()?;

    if letters.len() > board.cells().len() || !letters_available(board, &letters) {
        return None;
    }

    if !reachable::matches(board, word) {
        return None;
    }

    let mut search = Search {
        cells: board.cells(),
        size: board.size(),
        visited: vec![false; board.cells().len()],
        path: Vec::with_capacity(letters.len()),
    };

    for start in board.positions_of(first) {
        if search.extend(start, rest) {
            return Some(search.path);
        }
    }

    None
}

/// Check that the board holds every letter at least as often as the word uses it
fn letters_available<B: LetterBoard + ?Sized>(board: &B, letters: &[char]) -> bool {
    let mut needed: FxHashMap<char, usize> = FxHashMap::default();
    for &letter in letters {
        *needed.entry(letter).or_insert(0) += 1;
    }

    let mut on_board: FxHashMap<char, usize> = FxHashMap::default();
    for &cell in board.cells() {
        if needed.contains_key(&cell) {
            *on_board.entry(cell).or_insert(0) += 1;
        }
    }

    needed
        .iter()
        .all(|(letter, &count)| on_board.get(letter).is_some_and(|&have| have >= count))
}

struct Search<'a> {
    cells: &'a [char],
    size: usize,
    visited: Vec<bool>,
    path: Vec<Position>,
}

impl Search<'_> {
    /// Step onto `at` and try to spell `rest` from there
    fn extend(&mut self, at: Position, rest: &[char]) -> bool {
        let index = at.row * self.size + at.col;
        self.visited[index] = true;
        self.path.push(at);

        let Some((&letter, tail)) = rest.split_first() else {
            return true;
        };

        for next in at.neighbors(self.size) {
            let next_index = next.row * self.size + next.col;
            if !self.visited[next_index]
                && self.cells[next_index] == letter
                && self.extend(next, tail)
            {
                return true;
            }
        }

        // Backtrack
        self.visited[index] = false;
        self.path.pop();
        false
    }
}
