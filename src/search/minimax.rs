//! Fixed-depth full-width minimax with a positional evaluation.
//!
//! ## Evaluation
//!
//! For each placed worker: a height bonus (level 3 is 1000, level 2 is 30,
//! level 1 is 10) plus twice its move count, added for the searcher's
//! workers and subtracted for the opponent's, with a small uniform jitter
//! in [-3, 3] for tie-breaking between otherwise equal lines.
//!
//! ## Tree walk
//!
//! Terminal checks run in a fixed order at every node: an already-won
//! position scores ±10000, an immobilized player to move scores ∓10000
//! from the searcher's perspective, and only then does the depth cutoff
//! fall back to the evaluation. Ties keep the first action found (strict
//! inequality when comparing), and no pruning is performed: every branch
//! is explored to the configured depth.

use tracing::debug;

use crate::core::{GameRng, PlayerId};
use crate::rules::{Action, GameState};

use super::config::SearchConfig;

/// Terminal score for a decided position.
const WIN_SCORE: i32 = 10_000;

/// A minimax searcher for one player.
///
/// Operates on deep clones of the game states it is given and never
/// mutates them. Carries its own seeded RNG for the evaluation jitter.
#[derive(Clone, Debug)]
pub struct Minimax {
    player: PlayerId,
    config: SearchConfig,
    rng: GameRng,
}

impl Minimax {
    /// Create a searcher for `player`.
    #[must_use]
    pub fn new(player: PlayerId, config: SearchConfig) -> Self {
        Self {
            player,
            config,
            rng: GameRng::new(config.seed),
        }
    }

    /// The player this searcher maximizes for.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Heuristic static evaluation from this searcher's perspective.
    pub fn evaluate(&mut self, game: &GameState) -> i32 {
        let mut score = 0;

        for worker in game.workers() {
            let Some(pos) = worker.position else {
                continue;
            };

            let positional = match game.board().height_at(pos) {
                3 => 1000,
                2 => 30,
                1 => 10,
                _ => 0,
            };
            let mobility = game.legal_moves(worker.id).len() as i32 * 2;

            if worker.id.owner == self.player {
                score += positional + mobility;
            } else {
                score -= positional + mobility;
            }
        }

        score + self.rng.jitter(3)
    }

    /// Full-width minimax over the turn player's actions.
    ///
    /// Returns the score and, for non-terminal non-leaf nodes, the best
    /// action for the turn player.
    pub fn minimax(&mut self, game: &GameState, depth: u32, maximizing: bool) -> (i32, Option<Action>) {
        // Decided position: someone has already won
        if let Some(winner) = game.winner() {
            let score = if winner == self.player { WIN_SCORE } else { -WIN_SCORE };
            return (score, None);
        }
        for worker in game.workers() {
            if game.has_reached_top(worker.id) {
                let score = if worker.id.owner == self.player {
                    WIN_SCORE
                } else {
                    -WIN_SCORE
                };
                return (score, None);
            }
        }

        // The player to move is immobilized and loses
        if game.is_losing_position(game.turn()) {
            let score = if game.turn() == self.player {
                -WIN_SCORE
            } else {
                WIN_SCORE
            };
            return (score, None);
        }

        if depth == 0 {
            return (self.evaluate(game), None);
        }

        let actions = game.all_actions(game.turn());
        if actions.is_empty() {
            return (self.evaluate(game), None);
        }

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_action = None;

        for action in actions {
            let mut line = game.clone();
            line.apply_action(&action)
                .expect("enumerated action must be applicable");

            let (score, _) = self.minimax(&line, depth - 1, !maximizing);

            // Strict comparison: the first of equal lines is kept
            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_action = Some(action);
            }
        }

        (best_score, best_action)
    }

    /// Pick the best action for this searcher's player in the current
    /// position, or `None` when no action exists.
    pub fn choose_action(&mut self, game: &GameState) -> Option<Action> {
        debug!(player = %self.player, depth = self.config.depth, "minimax search start");
        let (score, action) = self.minimax(game, self.config.depth, true);
        match &action {
            Some(a) => debug!(score, action = %a, "minimax search complete"),
            None => debug!(score, "minimax search found no action"),
        }
        action
    }
}
