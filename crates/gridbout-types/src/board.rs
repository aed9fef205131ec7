//! The 5×5 board model.
//!
//! A board holds each value of the shared 1..=25 space exactly once. Cells
//! are marked as values are called; marking is monotonic — a marked cell
//! never reverts. The wire form is a 5×5 array of arrays where each cell is
//! either an integer 1..25 or the sentinel token `"X"`, identical in both
//! directions.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIDE, MARKED_SENTINEL, MAX_CELL_VALUE, MIN_CELL_VALUE};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One board cell: an unmarked value in 1..=25, or marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The cell still holds its value.
    Open(u8),
    /// The cell's value has been called.
    Marked,
}

impl Cell {
    /// Whether this cell has been marked.
    #[must_use]
    pub fn is_marked(self) -> bool {
        matches!(self, Self::Marked)
    }

    /// The cell's value, or `None` once marked.
    #[must_use]
    pub fn value(self) -> Option<u8> {
        match self {
            Self::Open(v) => Some(v),
            Self::Marked => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(v) => write!(f, "{v}"),
            Self::Marked => write!(f, "{MARKED_SENTINEL}"),
        }
    }
}

// Wire form: a bare integer for open cells, the string "X" for marked ones.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Open(v) => serializer.serialize_u8(*v),
            Self::Marked => serializer.serialize_str(MARKED_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u8),
            Token(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) if (MIN_CELL_VALUE..=MAX_CELL_VALUE).contains(&v) => Ok(Self::Open(v)),
            Raw::Number(v) => Err(de::Error::custom(format!("cell value out of range: {v}"))),
            Raw::Token(t) if t == MARKED_SENTINEL => Ok(Self::Marked),
            Raw::Token(t) => Err(de::Error::custom(format!("unknown cell token: {t:?}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A 5×5 grid of [`Cell`]s.
///
/// Constructed from a full permutation of 1..=25 (see the board generator
/// in `gridbout-matchcore`). [`Board::completed_lines`] is a stateless full
/// recount; callers diff against a previous count to detect newly completed
/// lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIDE]; BOARD_SIDE],
}

impl Board {
    /// Build a board from row-major values.
    #[must_use]
    pub fn from_rows(rows: [[u8; BOARD_SIDE]; BOARD_SIDE]) -> Self {
        Self {
            cells: rows.map(|row| row.map(Cell::Open)),
        }
    }

    /// Mark every cell equal to `value`. Returns whether any cell was newly
    /// marked; a value that is absent (or already marked) is a silent no-op.
    pub fn mark(&mut self, value: u8) -> bool {
        let mut changed = false;
        for row in &mut self.cells {
            for cell in row {
                if cell.value() == Some(value) {
                    *cell = Cell::Marked;
                    changed = true;
                }
            }
        }
        changed
    }

    /// Count fully marked lines: each of the 5 rows, 5 columns, and 2
    /// diagonals, independently. Recomputed from scratch on every call.
    #[must_use]
    pub fn completed_lines(&self) -> u8 {
        let mut lines = 0;
        for r in 0..BOARD_SIDE {
            if (0..BOARD_SIDE).all(|c| self.cells[r][c].is_marked()) {
                lines += 1;
            }
        }
        for c in 0..BOARD_SIDE {
            if (0..BOARD_SIDE).all(|r| self.cells[r][c].is_marked()) {
                lines += 1;
            }
        }
        if (0..BOARD_SIDE).all(|i| self.cells[i][i].is_marked()) {
            lines += 1;
        }
        if (0..BOARD_SIDE).all(|i| self.cells[i][BOARD_SIDE - 1 - i].is_marked()) {
            lines += 1;
        }
        lines
    }

    /// Whether `value` is still open somewhere on this board.
    #[must_use]
    pub fn contains(&self, value: u8) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|cell| cell.value() == Some(value))
    }

    /// The cell at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Row-major view of the grid.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIDE]; BOARD_SIDE] {
        &self.cells
    }

    /// All values still open, row-major.
    pub fn open_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().flatten().filter_map(|cell| cell.value())
    }

    /// Number of marked cells.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_marked())
            .count()
    }
}

// Wire form: bare 5×5 array of arrays, no struct wrapper.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut outer = serializer.serialize_seq(Some(BOARD_SIDE))?;
        for row in &self.cells {
            outer.serialize_element(&row[..])?;
        }
        outer.end()
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows: Vec<Vec<Cell>> = Vec::deserialize(deserializer)?;
        if rows.len() != BOARD_SIDE || rows.iter().any(|row| row.len() != BOARD_SIDE) {
            return Err(de::Error::custom("board must be a 5x5 grid"));
        }
        let mut cells = [[Cell::Marked; BOARD_SIDE]; BOARD_SIDE];
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                cells[r][c] = cell;
            }
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_board() -> Board {
        let mut rows = [[0u8; BOARD_SIDE]; BOARD_SIDE];
        for (i, cell) in rows.iter_mut().flatten().enumerate() {
            *cell = u8::try_from(i + 1).unwrap();
        }
        Board::from_rows(rows)
    }

    #[test]
    fn fresh_board_has_no_lines() {
        let board = sequential_board();
        assert_eq!(board.completed_lines(), 0);
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn mark_removes_value() {
        let mut board = sequential_board();
        assert!(board.contains(13));
        assert!(board.mark(13));
        assert!(!board.contains(13));
        assert_eq!(board.marked_count(), 1);
    }

    #[test]
    fn mark_is_idempotent() {
        let mut board = sequential_board();
        assert!(board.mark(7));
        assert!(!board.mark(7), "second mark of the same value is a no-op");
        assert_eq!(board.marked_count(), 1);
    }

    #[test]
    fn mark_absent_value_is_noop() {
        let mut board = sequential_board();
        assert!(!board.mark(0));
        assert!(!board.mark(26));
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn row_line_counts_once() {
        let mut board = sequential_board();
        for v in 1..=5 {
            board.mark(v);
        }
        assert_eq!(board.completed_lines(), 1);
    }

    #[test]
    fn column_and_diagonal_lines() {
        let mut board = sequential_board();
        // First column: 1, 6, 11, 16, 21.
        for v in [1, 6, 11, 16, 21] {
            board.mark(v);
        }
        assert_eq!(board.completed_lines(), 1);
        // Main diagonal: 1, 7, 13, 19, 25 (1 already marked).
        for v in [7, 13, 19, 25] {
            board.mark(v);
        }
        assert_eq!(board.completed_lines(), 2);
        // Anti-diagonal: 5, 9, 13, 17, 21 (13 and 21 already marked).
        for v in [5, 9, 17] {
            board.mark(v);
        }
        assert_eq!(board.completed_lines(), 3);
    }

    #[test]
    fn fully_marked_board_counts_all_lines() {
        let mut board = sequential_board();
        for v in MIN_CELL_VALUE..=MAX_CELL_VALUE {
            board.mark(v);
        }
        assert_eq!(
            board.completed_lines(),
            crate::constants::LINES_PER_BOARD,
            "5 rows + 5 columns + 2 diagonals"
        );
    }

    #[test]
    fn line_count_is_monotonic_under_marking() {
        let mut board = sequential_board();
        let mut previous = board.completed_lines();
        for v in MIN_CELL_VALUE..=MAX_CELL_VALUE {
            board.mark(v);
            let current = board.completed_lines();
            assert!(current >= previous, "count dropped after marking {v}");
            previous = current;
        }
    }

    #[test]
    fn wire_form_uses_sentinel() {
        let mut board = sequential_board();
        board.mark(1);
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json[0][0], serde_json::json!("X"));
        assert_eq!(json[0][1], serde_json::json!(2));
        assert_eq!(json.as_array().unwrap().len(), BOARD_SIDE);
    }

    #[test]
    fn wire_roundtrip() {
        let mut board = sequential_board();
        board.mark(3);
        board.mark(17);
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }

    #[test]
    fn rejects_malformed_wire_boards() {
        assert!(serde_json::from_str::<Board>("[[1,2,3]]").is_err());
        assert!(serde_json::from_str::<Cell>("99").is_err());
        assert!(serde_json::from_str::<Cell>("\"Y\"").is_err());
    }
}
