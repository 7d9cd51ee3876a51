//! Reachable-set path search
//!
//! Tracks, letter by letter, every cell the path could currently occupy. A cell
//! survives into the next step when it holds the next letter and touches any
//! surviving cell of the previous step. Cells are not marked as used, so a
//! path may come back through a cell it already passed.

use crate::core::{LetterBoard, Position};

/// Check whether `word` can be traced, allowing cells to repeat
///
/// Worst case `O(L · S²)` for a word of `L` letters on a board of `S` cells.
pub fn matches<B: LetterBoard + ?Sized>(board: &B, word: &str) -> bool {
    let mut letters = word.chars();
    let Some(first) = letters.next() else {
        return false;
    };

    // Cheap rejection before any geometry
    if !word.chars().all(|letter| board.contains_letter(letter)) {
        return false;
    }

    let mut live = board.positions_of(first);
    for letter in letters {
        live = board
            .positions_of(letter)
            .into_iter()
            .filter(|&next| live.iter().any(|&current| current.is_adjacent(next)))
            .collect();

        if live.is_empty() {
            return false;
        }
    }

    !live.is_empty()
}

/// Reconstruct one path accepted by [`matches`]
///
/// Each step remembers which cell of the previous step it was reached from, so
/// walking back from any surviving final cell yields a witness path.
pub fn trace<B: LetterBoard + ?Sized>(board: &B, word: &str) -> Option<Vec<Position>> {
    let mut letters = word.chars();
    let first = letters.next()?;

    // (cell, index of its predecessor in the previous layer)
    let mut layers: Vec<Vec<(Position, usize)>> = vec![
        board
            .positions_of(first)
            .into_iter()
            .map(|position| (position, 0))
            .collect(),
    ];

    for letter in letters {
        let previous = layers.last()?;
        let layer: Vec<(Position, usize)> = board
            .positions_of(letter)
            .into_iter()
            .filter_map(|next| {
                previous
                    .iter()
                    .position(|&(current, _)| current.is_adjacent(next))
                    .map(|parent| (next, parent))
            })
            .collect();

        if layer.is_empty() {
            return None;
        }
        layers.push(layer);
    }

    let mut path = Vec::with_capacity(layers.len());
    let mut index = 0;
    for layer in layers.iter().rev() {
        let &(position, parent) = layer.get(index)?;
        path.push(position);
        index = parent;
    }
    path.reverse();

    Some(path)
}
