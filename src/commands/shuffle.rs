//! Board shuffling command

use crate::board::roll_classic;
use crate::core::{Grid, GridError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Roll a classic board, reproducibly when a seed is given
///
/// # Errors
///
/// Propagates `GridError` from grid construction.
pub fn shuffle_board(seed: Option<u64>) -> Result<Grid, GridError> {
    match seed {
        Some(seed) => roll_classic(&mut StdRng::seed_from_u64(seed)),
        None => roll_classic(&mut rand::rng()),
    }
}
