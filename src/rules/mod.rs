//! The rule engine.
//!
//! `GameState` is the aggregate root: it owns the board, the four workers,
//! the selected god powers, and the turn/phase/winner scalars. All legality
//! queries and the mutation surface (placement, move, build, atomic action)
//! live here. Illegal requests from interactive probing are rejected with
//! a `RulesError`; invariant violations panic, since they indicate an
//! engine bug rather than bad input.

pub mod action;
pub mod engine;
pub mod error;

pub use action::Action;
pub use engine::{GameState, Phase};
pub use error::RulesError;
