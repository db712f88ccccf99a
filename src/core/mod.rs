//! Core engine types: players, board coordinates, RNG.
//!
//! These are the fundamental building blocks shared by the board model,
//! the rule engine, and the search. Nothing here knows the rules of the
//! game beyond the fixed 5×5 board dimension.

pub mod cell;
pub mod player;
pub mod rng;

pub use cell::{Cell, BOARD_SIZE};
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
