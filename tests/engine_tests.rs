//! Rule-engine integration tests: placement, turn flow, and the
//! occupancy/board invariants, plus property tests over random openings.

use proptest::prelude::*;

use santorini_engine::{Cell, GameState, Phase, PlayerId, RulesError, WorkerId};

fn wid(owner: u8, index: u8) -> WorkerId {
    WorkerId::new(PlayerId::new(owner), index)
}

/// Every placed worker's position must agree with the occupancy grid,
/// and nothing else may be occupied.
fn assert_occupancy_consistent(game: &GameState) {
    let mut occupied = 0;
    for worker in game.workers() {
        if let Some(pos) = worker.position {
            assert_eq!(game.board().occupant_at(pos), Some(worker.id));
            occupied += 1;
        }
    }
    let cells_occupied = Cell::all().filter(|&c| game.board().is_occupied(c)).count();
    assert_eq!(cells_occupied, occupied);
}

fn standard_opening() -> GameState {
    let mut game = GameState::new();
    game.place_worker_at(wid(0, 0), Cell::new(1, 1)).unwrap();
    game.place_worker_at(wid(1, 0), Cell::new(1, 3)).unwrap();
    game.place_worker_at(wid(0, 1), Cell::new(3, 3)).unwrap();
    game.place_worker_at(wid(1, 1), Cell::new(3, 1)).unwrap();
    game
}

// =============================================================================
// Turn Flow
// =============================================================================

#[test]
fn test_full_turn_cycle_preserves_invariants() {
    let mut game = standard_opening();
    assert_occupancy_consistent(&game);

    for _ in 0..10 {
        if game.is_over() {
            break;
        }
        let actions = game.all_actions(game.turn());
        assert!(!actions.is_empty());
        game.apply_action(&actions[0]).unwrap();
        assert_occupancy_consistent(&game);
    }
}

#[test]
fn test_turns_alternate() {
    let mut game = standard_opening();

    for expected in [0u8, 1, 0, 1] {
        assert_eq!(game.turn(), PlayerId::new(expected));
        let action = game.all_actions(game.turn())[0];
        game.apply_action(&action).unwrap();
        if game.is_over() {
            return;
        }
    }
}

#[test]
fn test_interactive_and_atomic_paths_agree() {
    let atomic = {
        let mut game = standard_opening();
        let action = game.all_actions(game.turn())[0];
        game.apply_action(&action).unwrap();
        game
    };

    let interactive = {
        let mut game = standard_opening();
        let action = game.all_actions(game.turn())[0];
        let won = game.move_worker(action.worker, action.move_to).unwrap();
        assert!(!won);
        game.build_at(action.worker, action.build_at).unwrap();
        game
    };

    assert_eq!(atomic, interactive);
}

#[test]
fn test_winner_is_monotonic() {
    let mut game = standard_opening();
    game.raise_cell(Cell::new(1, 1), 2);
    game.raise_cell(Cell::new(2, 2), 3);
    game.move_worker(wid(0, 0), Cell::new(2, 2)).unwrap();

    assert!(game.is_over());
    assert_eq!(game.winner(), Some(PlayerId::new(0)));

    // Every further mutation is rejected and the result stands
    assert_eq!(
        game.move_worker(wid(1, 0), Cell::new(0, 3)),
        Err(RulesError::GameOver)
    );
    assert_eq!(game.winner(), Some(PlayerId::new(0)));
}

#[test]
fn test_placement_requires_placement_phase() {
    let mut game = standard_opening();
    assert_eq!(game.phase(), Phase::Play);
    assert_eq!(
        game.place_worker_at(wid(0, 0), Cell::new(0, 0)),
        Err(RulesError::WrongPhase)
    );
}

#[test]
fn test_moves_rejected_during_placement() {
    let mut game = GameState::new();
    game.place_worker_at(wid(0, 0), Cell::new(1, 1)).unwrap();
    assert_eq!(
        game.move_worker(wid(0, 0), Cell::new(1, 2)),
        Err(RulesError::WrongPhase)
    );
}

#[test]
fn test_serde_roundtrip_mid_game() {
    let mut game = standard_opening();
    let action = game.all_actions(game.turn())[0];
    game.apply_action(&action).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(game, restored);
    // The restored state keeps playing identically
    let next = game.all_actions(game.turn());
    assert_eq!(next, restored.all_actions(restored.turn()));
}

// =============================================================================
// Properties over random openings
// =============================================================================

/// Four distinct placement cells: two per player.
fn opening_strategy() -> impl Strategy<Value = Vec<Cell>> {
    let all: Vec<Cell> = Cell::all().collect();
    proptest::sample::subsequence(all, 4)
}

fn game_from_opening(cells: &[Cell]) -> GameState {
    let mut game = GameState::new();
    game.place_worker_at(wid(0, 0), cells[0]).unwrap();
    game.place_worker_at(wid(1, 0), cells[1]).unwrap();
    game.place_worker_at(wid(0, 1), cells[2]).unwrap();
    game.place_worker_at(wid(1, 1), cells[3]).unwrap();
    game
}

proptest! {
    #[test]
    fn prop_legality_queries_are_idempotent(cells in opening_strategy()) {
        let game = game_from_opening(&cells);
        for worker in game.workers() {
            let moves = game.legal_moves(worker.id);
            let builds = game.legal_builds(worker.id);
            prop_assert_eq!(game.legal_moves(worker.id), moves);
            prop_assert_eq!(game.legal_builds(worker.id), builds);
        }
    }

    #[test]
    fn prop_enumeration_never_mutates(cells in opening_strategy()) {
        let game = game_from_opening(&cells);
        let before = game.clone();
        let _ = game.all_actions(PlayerId::new(0));
        let _ = game.all_actions(PlayerId::new(1));
        prop_assert_eq!(game, before);
    }

    #[test]
    fn prop_enumerated_actions_apply_cleanly(cells in opening_strategy()) {
        let game = game_from_opening(&cells);
        for action in game.all_actions(game.turn()) {
            let mut line = game.clone();
            prop_assert!(line.apply_action(&action).is_ok());
            // Moves land where they were aimed
            prop_assert_eq!(line.worker(action.worker).position, Some(action.move_to));
        }
    }

    #[test]
    fn prop_legal_moves_respect_base_rules(cells in opening_strategy()) {
        let game = game_from_opening(&cells);
        for worker in game.workers() {
            let pos = worker.position.unwrap();
            for cell in game.legal_moves(worker.id) {
                prop_assert!(pos.is_adjacent(cell));
                prop_assert!(!game.board().is_occupied(cell));
                prop_assert!(game.board().height_at(cell) <= game.board().height_at(pos) + 1);
                prop_assert!(!game.board().is_domed(cell));
            }
        }
    }

    #[test]
    fn prop_clone_mutation_never_aliases(cells in opening_strategy()) {
        let game = game_from_opening(&cells);
        let snapshot = game.clone();

        let mut clone = game.clone();
        for action in clone.all_actions(clone.turn()) {
            let mut line = clone.clone();
            let _ = line.apply_action(&action);
        }
        if let Some(action) = clone.all_actions(clone.turn()).first() {
            clone.apply_action(action).unwrap();
        }

        prop_assert_eq!(game, snapshot);
    }
}
