//! System-wide constants for the GridBout duel engine.

/// Side length of a board (5×5 grid).
pub const BOARD_SIDE: usize = 5;

/// Total cells per board.
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Smallest value a cell can hold.
pub const MIN_CELL_VALUE: u8 = 1;

/// Largest value a cell can hold. The value space 1..=25 is shared by both
/// boards of a match: each board is an independent permutation of it.
#[allow(clippy::cast_possible_truncation)]
pub const MAX_CELL_VALUE: u8 = BOARD_CELLS as u8;

/// Number of countable lines on a board: 5 rows + 5 columns + 2 diagonals.
pub const LINES_PER_BOARD: u8 = 12;

/// Completed lines required to win a match.
pub const WIN_LINES: u8 = 5;

/// Wire token for a marked cell.
pub const MARKED_SENTINEL: &str = "X";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "GridBout";
