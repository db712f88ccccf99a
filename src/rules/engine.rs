//! The game-state aggregate and its rule engine.
//!
//! ## Lifecycle
//!
//! A game moves through two phases. During **placement** each player puts
//! two workers on empty cells; the fourth placement flips the state into
//! **play**, where players alternate full turns (move one worker, then
//! build one level). Reaching height 3, a god-power special win, or leaving
//! the opponent with no legal action ends the game; `game_over` and
//! `winner` are monotonic until the state is rebuilt from scratch.
//!
//! ## Mutation surface
//!
//! Interactive callers use `move_worker` then `build_at`; the AI uses the
//! atomic `apply_action`, which composes exactly those two steps, so both
//! paths share one set of invariants.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::{Board, Worker, WorkerId};
use crate::core::{Cell, PlayerId};
use crate::gods::{God, GodManager};

use super::action::Action;
use super::error::RulesError;

/// Game lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Initial phase: workers are being positioned.
    Placement,
    /// Alternating turns of move-then-build.
    Play,
}

/// The aggregate root: board, workers, powers, and turn state.
///
/// `Clone` produces a fully independent deep copy (all state is value
/// typed, including god-power state), which the search relies on to
/// explore hypothetical lines without touching the live game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    workers: [Worker; 4],
    gods: GodManager,
    turn: PlayerId,
    phase: Phase,
    game_over: bool,
    winner: Option<PlayerId>,
    placed_workers: u8,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game: empty board, four unplaced workers, no god powers.
    #[must_use]
    pub fn new() -> Self {
        let mut workers = [Worker::new(WorkerId::new(PlayerId::new(0), 0)); 4];
        for (slot, id) in WorkerId::all().enumerate() {
            workers[slot] = Worker::new(id);
        }

        Self {
            board: Board::new(),
            workers,
            gods: GodManager::new(),
            turn: PlayerId::new(0),
            phase: Phase::Placement,
            game_over: false,
            winner: None,
            placed_workers: 0,
        }
    }

    /// A fresh game with god powers already selected.
    #[must_use]
    pub fn with_gods(gods: GodManager) -> Self {
        Self {
            gods,
            ..Self::new()
        }
    }

    // === Query surface ===

    /// The board (heights and occupancy), read-only.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All four workers, player 0's first.
    #[must_use]
    pub fn workers(&self) -> &[Worker; 4] {
        &self.workers
    }

    /// A worker by id.
    #[must_use]
    pub fn worker(&self, id: WorkerId) -> &Worker {
        &self.workers[id.slot()]
    }

    /// A player's two workers.
    pub fn workers_of(&self, player: PlayerId) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(move |w| w.id.owner == player)
    }

    /// The worker standing on a cell, if any.
    #[must_use]
    pub fn worker_at(&self, cell: Cell) -> Option<&Worker> {
        self.board.occupant_at(cell).map(|id| self.worker(id))
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The winning player, set only alongside game over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// How many of the four workers have been placed.
    #[must_use]
    pub fn placed_workers(&self) -> u8 {
        self.placed_workers
    }

    /// The god-power assignment.
    #[must_use]
    pub fn gods(&self) -> &GodManager {
        &self.gods
    }

    // === Configuration surface ===

    /// Assign a god power. Selection must happen before play begins.
    pub fn set_god(&mut self, player: PlayerId, god: God) {
        assert!(
            self.phase == Phase::Placement,
            "god selection must happen before play begins"
        );
        self.gods.set_god(player, god);
    }

    // === Legality queries ===

    /// Cells the worker may move to.
    ///
    /// A candidate is one of the 8 adjacent cells that is unoccupied, at
    /// most one level above the worker, below dome height, and approved by
    /// every selected god power. Unplaced workers have no moves.
    #[must_use]
    pub fn legal_moves(&self, id: WorkerId) -> SmallVec<[Cell; 8]> {
        let worker = self.worker(id);
        let Some(pos) = worker.position else {
            return SmallVec::new();
        };
        let current = self.board.height_at(pos);

        pos.neighbors()
            .into_iter()
            .filter(|&cell| {
                let height = self.board.height_at(cell);
                !self.board.is_occupied(cell)
                    && height <= current + 1
                    && !self.board.is_domed(cell)
                    && self.gods.can_move(&self.board, worker, cell)
            })
            .collect()
    }

    /// Cells the worker may build on, from its current position.
    #[must_use]
    pub fn legal_builds(&self, id: WorkerId) -> SmallVec<[Cell; 8]> {
        let worker = self.worker(id);
        match worker.position {
            Some(pos) => self.builds_from(worker, pos),
            None => SmallVec::new(),
        }
    }

    /// Build candidates as seen from `from`, against the current occupancy.
    ///
    /// Used both for `legal_builds` and for enumerating actions from a
    /// hypothetical post-move position. The worker's real cell still reads
    /// as occupied here, so enumeration never offers the vacated cell.
    fn builds_from(&self, worker: &Worker, from: Cell) -> SmallVec<[Cell; 8]> {
        let ghost = Worker {
            id: worker.id,
            position: Some(from),
        };

        from.neighbors()
            .into_iter()
            .filter(|&cell| {
                !self.board.is_occupied(cell)
                    && !self.board.is_domed(cell)
                    && self.gods.can_build(&self.board, &ghost, cell)
            })
            .collect()
    }

    /// Standard win test: the worker stands on height 3.
    #[must_use]
    pub fn has_reached_top(&self, id: WorkerId) -> bool {
        self.worker(id)
            .position
            .is_some_and(|pos| self.board.height_at(pos) == 3)
    }

    /// God-power win test for the worker's owner.
    #[must_use]
    pub fn special_win(&self, id: WorkerId) -> bool {
        self.gods.check_special_win(&self.board, self.worker(id))
    }

    /// Whether a player has no legal move for any placed worker.
    ///
    /// This is loss by immobilization.
    #[must_use]
    pub fn is_losing_position(&self, player: PlayerId) -> bool {
        !self
            .workers_of(player)
            .any(|w| w.is_placed() && !self.legal_moves(w.id).is_empty())
    }

    /// Every (worker, move, build) triple available to a player.
    ///
    /// Builds are computed from each hypothetical post-move position. The
    /// enumeration is a pure read: worker positions and occupancy are
    /// unchanged afterwards.
    #[must_use]
    pub fn all_actions(&self, player: PlayerId) -> Vec<Action> {
        let mut actions = Vec::new();

        for worker in self.workers_of(player) {
            if !worker.is_placed() {
                continue;
            }
            for move_to in self.legal_moves(worker.id) {
                for build_at in self.builds_from(worker, move_to) {
                    actions.push(Action::new(worker.id, move_to, build_at));
                }
            }
        }

        actions
    }

    // === Mutation surface ===

    /// Place a worker during the placement phase.
    ///
    /// The fourth placement transitions the game into the play phase with
    /// player 0 to move.
    pub fn place_worker_at(&mut self, id: WorkerId, cell: Cell) -> Result<(), RulesError> {
        if self.phase != Phase::Placement {
            return Err(RulesError::WrongPhase);
        }
        if self.worker(id).is_placed() {
            return Err(RulesError::WorkerAlreadyPlaced(id));
        }
        if self.board.is_occupied(cell) {
            return Err(RulesError::CellOccupied(cell));
        }

        self.workers[id.slot()].position = Some(cell);
        self.board.place(id, cell);
        self.placed_workers += 1;

        if self.placed_workers == 4 {
            self.phase = Phase::Play;
            self.turn = PlayerId::new(0);
        }

        Ok(())
    }

    /// Move a worker of the current player.
    ///
    /// Returns `Ok(true)` when the move wins the game (standard or god
    /// power); the turn then ends immediately and no build may follow.
    pub fn move_worker(&mut self, id: WorkerId, to: Cell) -> Result<bool, RulesError> {
        self.check_play_turn(id)?;
        let from = self
            .worker(id)
            .position
            .ok_or(RulesError::WorkerUnplaced(id))?;
        if !self.legal_moves(id).contains(&to) {
            return Err(RulesError::IllegalMove(to));
        }

        self.board.vacate(from);
        self.workers[id.slot()].position = Some(to);
        self.board.place(id, to);

        let worker = self.workers[id.slot()];
        self.gods.on_move(&self.board, &worker, from, to);

        if self.has_reached_top(id) || self.special_win(id) {
            self.game_over = true;
            self.winner = Some(id.owner);
            debug!(winner = %id.owner, mover = %id, to = %to, "game over: winning move");
            return Ok(true);
        }

        Ok(false)
    }

    /// Build one level with a worker of the current player, completing the
    /// turn: the turn flips, and if the incoming player has no legal action
    /// the game ends in their opponent's favor.
    pub fn build_at(&mut self, id: WorkerId, at: Cell) -> Result<(), RulesError> {
        self.check_play_turn(id)?;
        if !self.worker(id).is_placed() {
            return Err(RulesError::WorkerUnplaced(id));
        }
        if !self.legal_builds(id).contains(&at) {
            return Err(RulesError::IllegalBuild(at));
        }

        let height = self.board.height_at(at);
        self.board.set_height(at, height + 1);

        let worker = self.workers[id.slot()];
        self.gods.on_build(&self.board, &worker, at);

        self.turn = self.turn.other();

        if self.is_losing_position(self.turn) {
            self.game_over = true;
            self.winner = Some(self.turn.other());
            debug!(
                winner = %self.turn.other(),
                loser = %self.turn,
                "game over: no legal actions remain"
            );
        }

        Ok(())
    }

    /// Execute a full turn atomically: move, then build unless the move
    /// already won.
    pub fn apply_action(&mut self, action: &Action) -> Result<(), RulesError> {
        let won = self.move_worker(action.worker, action.move_to)?;
        if !won {
            self.build_at(action.worker, action.build_at)?;
        }
        Ok(())
    }

    fn check_play_turn(&self, id: WorkerId) -> Result<(), RulesError> {
        if self.game_over {
            return Err(RulesError::GameOver);
        }
        if self.phase != Phase::Play {
            return Err(RulesError::WrongPhase);
        }
        if id.owner != self.turn {
            return Err(RulesError::NotYourTurn(id.owner));
        }
        Ok(())
    }

    /// Test and scenario staging: raise a cell to a given height.
    ///
    /// Goes through the same monotonic height mutation builds use.
    pub fn raise_cell(&mut self, cell: Cell, height: u8) {
        self.board.set_height(cell, height);
    }
}
