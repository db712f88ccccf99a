//! Adversarial search: heuristic evaluation and fixed-depth minimax.
//!
//! The searcher never owns live game state. Every explored line runs on a
//! deep clone of the root state (god-power state included), so hypothetical
//! play can never leak into the real game.
//!
//! Placement-phase decisions use a separate priority policy rather than
//! tree search; see `placement`.

pub mod config;
pub mod minimax;
pub mod placement;

pub use config::SearchConfig;
pub use minimax::Minimax;
pub use placement::ai_choose_placement;
