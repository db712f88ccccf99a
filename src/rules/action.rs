//! Action representation.
//!
//! A complete turn in the play phase is one atomic triple: which worker
//! acts, where it moves, and where it builds. The build is skipped by the
//! engine when the move itself wins.

use serde::{Deserialize, Serialize};

use crate::board::WorkerId;
use crate::core::Cell;

/// A (worker, move, build) triple executed on a player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The acting worker.
    pub worker: WorkerId,
    /// Destination of the move step.
    pub move_to: Cell,
    /// Target of the build step.
    pub build_at: Cell,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub const fn new(worker: WorkerId, move_to: Cell, build_at: Cell) -> Self {
        Self {
            worker,
            move_to,
            build_at,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} moves to {}, builds at {}",
            self.worker, self.move_to, self.build_at
        )
    }
}
