//! The six god powers and their variant-local state.
//!
//! ## Hook contract
//!
//! - `can_move` / `can_build`: legality overrides, consulted on top of the
//!   base positional rules. Powers may only restrict further or (Atlas)
//!   relax the build ceiling; they never bypass occupancy.
//! - `on_move` / `on_build`: invoked once per completed move/build of a
//!   worker owned by the power's player, after the board reflects it.
//! - `has_won`: special win conditions checked alongside the standard
//!   reach-level-3 rule.
//!
//! ## Single-slot tracking
//!
//! Artemis and Demeter track one "current worker" at a time: the first
//! move/build arms the restriction, the second for the same worker clears
//! it, and an interleaved action by the other worker steals the slot and
//! drops the prior restriction. Two workers alternating within a turn
//! therefore lose the armed state. This matches the rule set as played;
//! it is deliberately not per-worker.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Worker, WorkerId};
use crate::core::{Cell, PlayerId};

/// Pan's memory: the height each worker last moved from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanState {
    /// Pre-move height per worker index, recorded by `on_move`.
    pub previous_height: [Option<u8>; 2],
}

/// Artemis's memory: the origin of the current worker's first move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtemisState {
    /// Cell the first move departed from; forbidden as a second-move target.
    pub first_move_from: Option<Cell>,
    /// The worker the restriction applies to.
    pub current_worker: Option<WorkerId>,
    /// Armed after the first move, cleared after the second or after a build.
    pub awaiting_second: bool,
}

impl ArtemisState {
    fn record_move(&mut self, worker: WorkerId, from: Cell) {
        if !self.awaiting_second || self.current_worker != Some(worker) {
            self.first_move_from = Some(from);
            self.awaiting_second = true;
            self.current_worker = Some(worker);
        } else {
            // Second move completed
            self.clear();
        }
    }

    fn clear(&mut self) {
        self.first_move_from = None;
        self.awaiting_second = false;
        self.current_worker = None;
    }
}

/// Demeter's memory: the cell of the current worker's first build.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemeterState {
    /// Cell of the first build; forbidden for the second build.
    pub first_build_at: Option<Cell>,
    /// The worker the restriction applies to.
    pub current_worker: Option<WorkerId>,
    /// Armed after the first build, cleared after the second.
    pub second_available: bool,
}

impl DemeterState {
    fn record_build(&mut self, worker: WorkerId, at: Cell) {
        if !self.second_available || self.current_worker != Some(worker) {
            self.first_build_at = Some(at);
            self.second_available = true;
            self.current_worker = Some(worker);
        } else {
            // Second build completed
            self.first_build_at = None;
            self.second_available = false;
            self.current_worker = None;
        }
    }
}

/// Athena's memory: which player is currently barred from climbing.
///
/// Recomputed on every move by Athena's owner: a climb blocks the opponent,
/// any other move lifts the block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthenaState {
    /// Player whose workers may not step up, if any.
    pub blocked: Option<PlayerId>,
}

/// Poseidon's memory: workers that have not moved this turn.
///
/// The extra-build mechanic (up to three builds next to an unmoved
/// ground-level worker) is intentionally not wired into the build flow;
/// the hook only maintains the movement bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseidonState {
    /// Ids of workers that have not moved in the current turn.
    pub unmoved: FxHashSet<WorkerId>,
}

/// A god power: identity plus variant-local mutable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum God {
    /// Also wins by moving down two or more levels.
    Pan(PanState),
    /// Builds domes as if they were blocks.
    Atlas,
    /// May move a worker twice, but not back to its starting cell.
    Artemis(ArtemisState),
    /// Builds an additional block, on a different cell than the first.
    Demeter(DemeterState),
    /// After climbing, bars the opponent from climbing until her next move.
    Athena(AthenaState),
    /// End-of-turn bonus builds near unmoved ground-level workers.
    Poseidon(PoseidonState),
}

impl God {
    /// Instantiate a power by name, as used on the selection screen.
    #[must_use]
    pub fn by_name(name: &str) -> Option<God> {
        match name {
            "Pan" => Some(God::Pan(PanState::default())),
            "Atlas" => Some(God::Atlas),
            "Artemis" => Some(God::Artemis(ArtemisState::default())),
            "Demeter" => Some(God::Demeter(DemeterState::default())),
            "Athena" => Some(God::Athena(AthenaState::default())),
            "Poseidon" => Some(God::Poseidon(PoseidonState::default())),
            _ => None,
        }
    }

    /// All selectable power names.
    #[must_use]
    pub const fn names() -> [&'static str; 6] {
        ["Pan", "Atlas", "Artemis", "Demeter", "Athena", "Poseidon"]
    }

    /// The power's display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            God::Pan(_) => "Pan",
            God::Atlas => "Atlas",
            God::Artemis(_) => "Artemis",
            God::Demeter(_) => "Demeter",
            God::Athena(_) => "Athena",
            God::Poseidon(_) => "Poseidon",
        }
    }

    /// The rule text shown on the power's card.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            God::Pan(_) => "You also win by jumping down 2 levels.",
            God::Atlas => "Build domes as if they were blocks.",
            God::Artemis(_) => "You may move a builder twice before building.",
            God::Demeter(_) => {
                "Build an additional block on a different space than the first block."
            }
            God::Athena(_) => {
                "After stepping up a level, no other builders may step up a level \
                 until your next turn."
            }
            God::Poseidon(_) => {
                "At the end of your turn, build up to three blocks neighboring any \
                 builder on the ground level that did not move."
            }
        }
    }

    /// Movement legality override.
    #[must_use]
    pub fn can_move(&self, board: &Board, worker: &Worker, target: Cell) -> bool {
        match self {
            God::Artemis(state) => {
                // A second move may not return to the first move's origin
                !(state.awaiting_second
                    && state.current_worker == Some(worker.id)
                    && state.first_move_from == Some(target))
            }
            God::Athena(state) => {
                if state.blocked == Some(worker.id.owner) {
                    match worker.position {
                        Some(pos) => board.height_at(target) <= board.height_at(pos),
                        None => true,
                    }
                } else {
                    true
                }
            }
            _ => true,
        }
    }

    /// Build legality override.
    #[must_use]
    pub fn can_build(&self, board: &Board, worker: &Worker, target: Cell) -> bool {
        match self {
            God::Atlas => !board.is_domed(target) && !board.is_occupied(target),
            God::Demeter(state) => {
                // A second build may not repeat the first build's cell
                !(state.second_available
                    && state.current_worker == Some(worker.id)
                    && state.first_build_at == Some(target))
            }
            _ => true,
        }
    }

    /// Post-move trigger. The board already reflects the move; `from` is the
    /// vacated cell and the worker stands on `to`.
    pub fn on_move(&mut self, board: &Board, worker: &Worker, from: Cell, to: Cell) {
        match self {
            God::Pan(state) => {
                state.previous_height[worker.id.index as usize] = Some(board.height_at(from));
            }
            God::Artemis(state) => state.record_move(worker.id, from),
            God::Athena(state) => {
                state.blocked = if board.height_at(to) > board.height_at(from) {
                    Some(worker.id.owner.other())
                } else {
                    None
                };
            }
            God::Poseidon(state) => {
                state.unmoved.remove(&worker.id);
            }
            God::Atlas | God::Demeter(_) => {}
        }
    }

    /// Post-build trigger.
    pub fn on_build(&mut self, _board: &Board, worker: &Worker, at: Cell) {
        match self {
            God::Demeter(state) => state.record_build(worker.id, at),
            God::Artemis(state) => state.clear(),
            // Poseidon's bonus builds would resolve here; see PoseidonState.
            God::Pan(_) | God::Atlas | God::Athena(_) | God::Poseidon(_) => {}
        }
    }

    /// Special win condition, checked after a move alongside the standard
    /// reach-level-3 rule.
    #[must_use]
    pub fn has_won(&self, board: &Board, worker: &Worker) -> bool {
        match self {
            God::Pan(state) => {
                match (state.previous_height[worker.id.index as usize], worker.position) {
                    (Some(prev), Some(pos)) => {
                        i16::from(prev) - i16::from(board.height_at(pos)) >= 2
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for God {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
