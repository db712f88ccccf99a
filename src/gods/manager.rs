//! Per-player god power assignment and hook dispatch.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Worker};
use crate::core::{Cell, PlayerId, PlayerPair};

use super::power::God;

/// Holds each player's selected god power (or none) and routes the rule
/// hooks to it.
///
/// Legality queries (`can_move`, `can_build`) consult *both* players'
/// powers: Athena restricts the opponent's workers, so the acting player's
/// power alone never sees the moves it must veto. Each power's hook limits
/// itself to the workers it governs, so the double consultation is safe.
///
/// Post-action triggers and special win checks go only to the acting
/// worker's owner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GodManager {
    gods: PlayerPair<Option<God>>,
}

impl GodManager {
    /// A manager with no powers selected; every hook is a no-op default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a power to a player. Selection happens before play begins.
    pub fn set_god(&mut self, player: PlayerId, god: God) {
        self.gods[player] = Some(god);
    }

    /// The power selected by a player, if any.
    #[must_use]
    pub fn god(&self, player: PlayerId) -> Option<&God> {
        self.gods[player].as_ref()
    }

    /// Whether a move to `target` is allowed under every selected power.
    #[must_use]
    pub fn can_move(&self, board: &Board, worker: &Worker, target: Cell) -> bool {
        self.gods
            .iter()
            .filter_map(|(_, god)| god.as_ref())
            .all(|god| god.can_move(board, worker, target))
    }

    /// Whether a build at `target` is allowed under every selected power.
    #[must_use]
    pub fn can_build(&self, board: &Board, worker: &Worker, target: Cell) -> bool {
        self.gods
            .iter()
            .filter_map(|(_, god)| god.as_ref())
            .all(|god| god.can_build(board, worker, target))
    }

    /// Notify the acting owner's power of a completed move.
    pub fn on_move(&mut self, board: &Board, worker: &Worker, from: Cell, to: Cell) {
        if let Some(god) = self.gods[worker.id.owner].as_mut() {
            god.on_move(board, worker, from, to);
        }
    }

    /// Notify the acting owner's power of a completed build.
    pub fn on_build(&mut self, board: &Board, worker: &Worker, at: Cell) {
        if let Some(god) = self.gods[worker.id.owner].as_mut() {
            god.on_build(board, worker, at);
        }
    }

    /// Whether the owner's power grants this worker a special win.
    #[must_use]
    pub fn check_special_win(&self, board: &Board, worker: &Worker) -> bool {
        self.gods[worker.id.owner]
            .as_ref()
            .is_some_and(|god| god.has_won(board, worker))
    }
}
