//! Board generation.
//!
//! A board is a uniformly random permutation of 1..=25 laid out row-major
//! into a 5×5 grid. Randomness quality is not security-sensitive; what
//! matters is the permutation invariant — every value exactly once.

use rand::Rng;
use rand::seq::SliceRandom;

use gridbout_types::Board;
use gridbout_types::constants::{BOARD_SIDE, MAX_CELL_VALUE, MIN_CELL_VALUE};

/// Generate a fresh board from the thread-local RNG.
#[must_use]
pub fn generate_board() -> Board {
    generate_board_with(&mut rand::thread_rng())
}

/// Generate a fresh board from a caller-supplied RNG. Tests pass a seeded
/// generator to get reproducible boards.
pub fn generate_board_with<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut values: Vec<u8> = (MIN_CELL_VALUE..=MAX_CELL_VALUE).collect();
    values.shuffle(rng);

    let mut rows = [[0u8; BOARD_SIDE]; BOARD_SIDE];
    for (i, value) in values.into_iter().enumerate() {
        rows[i / BOARD_SIDE][i % BOARD_SIDE] = value;
    }
    Board::from_rows(rows)
}
