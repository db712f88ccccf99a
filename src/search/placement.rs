//! Placement-phase policy.
//!
//! Worker placement is not searched: the opening is decided by a fixed
//! priority list. Prefer the center, then the four cells orthogonally
//! adjacent to it, then the corners, and only then a random free cell.

use crate::core::{Cell, GameRng};
use crate::rules::GameState;

/// Center and orthogonal-adjacent cells, strongest first.
const CENTER_CELLS: [Cell; 5] = [
    Cell::center(),
    Cell::new(1, 2),
    Cell::new(3, 2),
    Cell::new(2, 1),
    Cell::new(2, 3),
];

/// The four corners.
const CORNER_CELLS: [Cell; 4] = [
    Cell::new(0, 0),
    Cell::new(0, 4),
    Cell::new(4, 0),
    Cell::new(4, 4),
];

/// Choose a placement cell for the AI.
///
/// Returns `None` only when the board has no free cell, which cannot
/// happen in a regular game (at most 4 of 25 cells are ever occupied
/// during placement).
#[must_use]
pub fn ai_choose_placement(game: &GameState, rng: &mut GameRng) -> Option<Cell> {
    let available: Vec<Cell> = game.board().available_cells().collect();
    if available.is_empty() {
        return None;
    }

    for priority in [CENTER_CELLS.as_slice(), CORNER_CELLS.as_slice()] {
        if let Some(cell) = priority.iter().copied().find(|c| available.contains(c)) {
            return Some(cell);
        }
    }

    rng.choose(&available).copied()
}
