//! Board production from classic letter dice
//!
//! Each die is a six-sided cube with one letter per face. A roll shuffles
//! the dice into the sixteen cells of a 4x4 board and shows one face of each.

use crate::core::{Grid, GridError};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Side length of the classic board
pub const CLASSIC_SIZE: usize = 4;

/// The sixteen classic dice, one string of six faces per die
pub const CLASSIC_DICE: [&str; CLASSIC_SIZE * CLASSIC_SIZE] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTV", "DELRVY", "DEILRX", "DISTTY",
    "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ",
];

/// Roll the classic dice into a new 4x4 grid
///
/// The result depends only on the RNG, so a seeded RNG reproduces a board.
///
/// # Errors
/// Propagates `GridError` from grid construction.
///
/// # Examples
/// ```
/// use boggle_judge::board::roll_classic;
/// use boggle_judge::core::LetterBoard;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let grid = roll_classic(&mut StdRng::seed_from_u64(7)).unwrap();
/// assert_eq!(grid.size(), 4);
/// ```
pub fn roll_classic<R: Rng + ?Sized>(rng: &mut R) -> Result<Grid, GridError> {
    let mut dice = CLASSIC_DICE;
    dice.shuffle(rng);

    let cells: Vec<char> = dice
        .iter()
        .map(|die| {
            let faces: Vec<char> = die.chars().collect();
            faces[rng.random_range(0..faces.len())]
        })
        .collect();

    let grid = Grid::new(cells, CLASSIC_SIZE)?;
    debug!(%grid, "Rolled board");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterBoard;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn classic_dice_have_six_letter_faces() {
        for die in CLASSIC_DICE {
            assert_eq!(die.len(), 6, "{die}");
            assert!(die.chars().all(|c| c.is_ascii_uppercase()), "{die}");
        }
    }

    #[test]
    fn roll_produces_classic_board() {
        let grid = roll_classic(&mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(grid.size(), CLASSIC_SIZE);
        assert_eq!(grid.cells().len(), 16);
    }

    #[test]
    fn seeded_rolls_repeat() {
        let first = roll_classic(&mut StdRng::seed_from_u64(42)).unwrap();
        let second = roll_classic(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_cell_shows_a_die_face() {
        let grid = roll_classic(&mut StdRng::seed_from_u64(9)).unwrap();
        for &cell in grid.cells() {
            assert!(
                CLASSIC_DICE.iter().any(|die| die.contains(cell)),
                "no die shows {cell}"
            );
        }
    }
}
