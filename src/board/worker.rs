//! Worker entities.
//!
//! Exactly four workers exist per game, two per player, created once at
//! game start and never destroyed. Only their position mutates.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, PlayerId};

/// Worker identity: owning player plus per-player index (0 or 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerId {
    /// Owning player.
    pub owner: PlayerId,
    /// Per-player worker index, 0 or 1.
    pub index: u8,
}

impl WorkerId {
    /// Create a worker id. Panics if `index` is not 0 or 1.
    #[must_use]
    pub const fn new(owner: PlayerId, index: u8) -> Self {
        assert!(index < 2, "worker index must be 0 or 1");
        Self { owner, index }
    }

    /// Flat slot in the game's four-worker array.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.owner.index() * 2 + self.index as usize
    }

    /// Iterate over all four worker ids, player 0's workers first.
    pub fn all() -> impl Iterator<Item = WorkerId> {
        PlayerId::both().flat_map(|p| (0..2u8).map(move |i| WorkerId::new(p, i)))
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}W{}", self.owner.0, self.index)
    }
}

/// A worker: fixed identity, mutable position.
///
/// `position` is `None` until the worker is placed during the placement
/// phase; an unplaced worker has no moves, no builds, and no score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Worker {
    /// Identity, fixed at game start.
    pub id: WorkerId,
    /// Current cell, or `None` while unplaced.
    pub position: Option<Cell>,
}

impl Worker {
    /// Create an unplaced worker.
    #[must_use]
    pub const fn new(id: WorkerId) -> Self {
        Self { id, position: None }
    }

    /// Whether the worker has been placed on the board.
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}
