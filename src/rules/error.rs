//! Rejection reasons for illegal requests.
//!
//! These arise from normal interactive probing (a UI checking whether a
//! click is legal) and from malformed caller input. They are expected,
//! recoverable, and never indicate a bug in the engine.

use thiserror::Error;

use crate::board::WorkerId;
use crate::core::{Cell, PlayerId};

/// Why a placement, move, or build request was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The game has ended; no further mutation is accepted.
    #[error("game is already over")]
    GameOver,

    /// The request does not fit the current phase (e.g. placing a worker
    /// during play, or moving during placement).
    #[error("request is not valid in the current phase")]
    WrongPhase,

    /// The acting worker does not belong to the player whose turn it is.
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    /// The worker has not been placed on the board yet.
    #[error("worker {0} is not placed")]
    WorkerUnplaced(WorkerId),

    /// The worker was already placed during the placement phase.
    #[error("worker {0} is already placed")]
    WorkerAlreadyPlaced(WorkerId),

    /// The target cell is occupied by another worker.
    #[error("cell {0} is occupied")]
    CellOccupied(Cell),

    /// The move target is not in the worker's legal move set.
    #[error("illegal move to {0}")]
    IllegalMove(Cell),

    /// The build target is not in the worker's legal build set.
    #[error("illegal build at {0}")]
    IllegalBuild(Cell),
}
