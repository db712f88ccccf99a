//! # santorini-engine
//!
//! A game-state engine for the board game Santorini: a two-player abstract
//! strategy game on a 5×5 grid where players race to move a worker onto a
//! level-3 building.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: No rendering, input handling, or I/O. A UI layer drives
//!    the engine through legality queries and a small mutation surface.
//!
//! 2. **Cheap deep clones**: All state is value-typed (fixed arrays, `Copy`
//!    coordinates, id-based occupancy). `GameState::clone()` is a full deep
//!    copy, which the search relies on for branch isolation.
//!
//! 3. **Deterministic search**: All randomness flows through a seedable
//!    `GameRng` carried by the search configuration, never through ambient
//!    global state.
//!
//! ## Modules
//!
//! - `core`: Player ids, board coordinates, deterministic RNG
//! - `board`: Height grid, occupancy grid, workers
//! - `rules`: The rule engine: legality, win detection, action application
//! - `gods`: God powers (per-player rule modifiers)
//! - `search`: Heuristic evaluation and fixed-depth minimax

pub mod core;
pub mod board;
pub mod rules;
pub mod gods;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Cell, GameRng, PlayerId, PlayerPair, BOARD_SIZE};

pub use crate::board::{Board, Worker, WorkerId};

pub use crate::rules::{Action, GameState, Phase, RulesError};

pub use crate::gods::{
    ArtemisState, AthenaState, DemeterState, God, GodManager, PanState, PoseidonState,
};

pub use crate::search::{ai_choose_placement, Minimax, SearchConfig};
