//! God powers: per-player rule modifiers.
//!
//! Each player may be assigned at most one god power before play begins.
//! A power can override move legality, build legality, and win detection,
//! and reacts to completed moves and builds through post-action hooks.
//! Powers carry their own mutable state (for multi-step rules such as
//! Artemis's double move), modeled as explicit structs on each enum variant
//! so that cloning a game state snapshots power state along with it. That
//! keeps hypothetical search branches from leaking power state into the
//! live game.

pub mod manager;
pub mod power;

pub use manager::GodManager;
pub use power::{ArtemisState, AthenaState, DemeterState, God, PanState, PoseidonState};
