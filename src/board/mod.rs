//! Board model: the height grid, the occupancy grid, and workers.
//!
//! The board is pure data with invariant-preserving mutators. Occupancy is
//! tracked by `WorkerId` value rather than by reference, so cloning the
//! containing game state is automatically a deep copy: mutating a clone can
//! never alias the original. The rule engine owns all game-logic decisions;
//! this module only enforces the structural invariants (height range,
//! one worker per cell, occupancy agrees with worker positions).

pub mod grid;
pub mod worker;

pub use grid::Board;
pub use worker::{Worker, WorkerId};
