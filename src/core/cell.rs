//! Board coordinates.
//!
//! A `Cell` is a (column, row) pair that is always in bounds on the fixed
//! 5×5 board. Out-of-range coordinates are rejected at construction, so the
//! rest of the engine never bounds-checks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Board side length. Santorini is always played on 5×5.
pub const BOARD_SIZE: u8 = 5;

/// An in-bounds board coordinate.
///
/// `col` runs left to right, `row` bottom to top, both in `0..5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    col: u8,
    row: u8,
}

impl Cell {
    /// Create a cell. Panics if either coordinate is out of bounds;
    /// use [`Cell::try_new`] for unvalidated input.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        assert!(col < BOARD_SIZE && row < BOARD_SIZE, "cell out of bounds");
        Self { col, row }
    }

    /// Create a cell from possibly out-of-range coordinates.
    ///
    /// Returns `None` when the coordinates fall off the board. This is the
    /// entry point for UI input and neighbor arithmetic.
    #[must_use]
    pub fn try_new(col: i32, row: i32) -> Option<Self> {
        if (0..i32::from(BOARD_SIZE)).contains(&col) && (0..i32::from(BOARD_SIZE)).contains(&row) {
            Some(Self {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// The center cell (2,2), the strongest opening placement.
    #[must_use]
    pub const fn center() -> Self {
        Self::new(2, 2)
    }

    /// All in-bounds Chebyshev-adjacent cells (up to 8).
    ///
    /// Order is deterministic: column offset outer, row offset inner,
    /// each from -1 to +1, skipping the cell itself.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Cell; 8]> {
        let mut out = SmallVec::new();
        for dc in -1..=1 {
            for dr in -1..=1 {
                if dc == 0 && dr == 0 {
                    continue;
                }
                if let Some(cell) = Cell::try_new(i32::from(self.col) + dc, i32::from(self.row) + dr)
                {
                    out.push(cell);
                }
            }
        }
        out
    }

    /// Chebyshev adjacency test (the move/build reach of a worker).
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        let dc = (i32::from(self.col) - i32::from(other.col)).abs();
        let dr = (i32::from(self.row) - i32::from(other.row)).abs();
        self != other && dc <= 1 && dr <= 1
    }

    /// Iterate over every cell on the board, row-major.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell { col, row }))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}
