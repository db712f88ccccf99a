//! The 5×5 height and occupancy grids.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, BOARD_SIZE};

use super::worker::WorkerId;

/// Maximum cell height. 4 is a dome: it can never be built on again.
pub const MAX_HEIGHT: u8 = 4;

const N: usize = BOARD_SIZE as usize;

/// The board: a height per cell plus a derived occupancy index.
///
/// Heights only ever increase (builds add one level, capped at 4 by the
/// legality checks). Occupancy must always agree with the `Worker::position`
/// fields of the owning game state; `place` and `vacate` keep at most one
/// worker per cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    heights: [[u8; N]; N],
    occupants: [[Option<WorkerId>; N]; N],
}

impl Board {
    /// An empty board: all heights zero, no occupants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Height of a cell, in `0..=4`.
    #[must_use]
    pub fn height_at(&self, cell: Cell) -> u8 {
        self.heights[cell.row() as usize][cell.col() as usize]
    }

    /// Set a cell's height. Build-only mutation; heights never decrease.
    ///
    /// Panics if `h` exceeds the dome height or would lower the cell.
    pub fn set_height(&mut self, cell: Cell, h: u8) {
        assert!(h <= MAX_HEIGHT, "height must be 0..=4");
        assert!(
            h >= self.height_at(cell),
            "heights never decrease (cell {cell})"
        );
        self.heights[cell.row() as usize][cell.col() as usize] = h;
    }

    /// Whether a cell carries a dome.
    #[must_use]
    pub fn is_domed(&self, cell: Cell) -> bool {
        self.height_at(cell) >= MAX_HEIGHT
    }

    /// The worker standing on a cell, if any.
    #[must_use]
    pub fn occupant_at(&self, cell: Cell) -> Option<WorkerId> {
        self.occupants[cell.row() as usize][cell.col() as usize]
    }

    /// Whether any worker stands on a cell.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupant_at(cell).is_some()
    }

    /// Record a worker standing on a cell.
    ///
    /// Panics on double occupancy: that is an engine bug, not caller input.
    pub fn place(&mut self, worker: WorkerId, cell: Cell) {
        let slot = &mut self.occupants[cell.row() as usize][cell.col() as usize];
        assert!(slot.is_none(), "cell {cell} already occupied");
        *slot = Some(worker);
    }

    /// Clear a cell's occupant, returning it.
    pub fn vacate(&mut self, cell: Cell) -> Option<WorkerId> {
        self.occupants[cell.row() as usize][cell.col() as usize].take()
    }

    /// All unoccupied cells, row-major. Used by the placement policy.
    pub fn available_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(|&c| !self.is_occupied(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn wid(owner: u8, index: u8) -> WorkerId {
        WorkerId::new(PlayerId::new(owner), index)
    }

    #[test]
    fn test_new_board_is_flat_and_empty() {
        let board = Board::new();
        for cell in Cell::all() {
            assert_eq!(board.height_at(cell), 0);
            assert_eq!(board.occupant_at(cell), None);
        }
        assert_eq!(board.available_cells().count(), 25);
    }

    #[test]
    fn test_set_height() {
        let mut board = Board::new();
        let cell = Cell::new(1, 2);

        board.set_height(cell, 3);
        assert_eq!(board.height_at(cell), 3);
        assert!(!board.is_domed(cell));

        board.set_height(cell, 4);
        assert!(board.is_domed(cell));
    }

    #[test]
    #[should_panic(expected = "height must be 0..=4")]
    fn test_set_height_rejects_over_dome() {
        let mut board = Board::new();
        board.set_height(Cell::new(0, 0), 5);
    }

    #[test]
    #[should_panic(expected = "heights never decrease")]
    fn test_set_height_rejects_decrease() {
        let mut board = Board::new();
        let cell = Cell::new(0, 0);
        board.set_height(cell, 2);
        board.set_height(cell, 1);
    }

    #[test]
    fn test_place_and_vacate() {
        let mut board = Board::new();
        let cell = Cell::new(3, 3);
        let worker = wid(0, 0);

        board.place(worker, cell);
        assert_eq!(board.occupant_at(cell), Some(worker));
        assert!(board.is_occupied(cell));

        assert_eq!(board.vacate(cell), Some(worker));
        assert!(!board.is_occupied(cell));
        assert_eq!(board.vacate(cell), None);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_double_occupancy_is_fatal() {
        let mut board = Board::new();
        let cell = Cell::new(2, 2);
        board.place(wid(0, 0), cell);
        board.place(wid(1, 0), cell);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new();
        board.set_height(Cell::new(1, 1), 2);
        board.place(wid(0, 1), Cell::new(0, 0));

        let mut copy = board.clone();
        copy.set_height(Cell::new(1, 1), 4);
        copy.vacate(Cell::new(0, 0));

        assert_eq!(board.height_at(Cell::new(1, 1)), 2);
        assert!(board.is_occupied(Cell::new(0, 0)));
    }
}
