//! Minimax search benchmark over a mid-game position.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use santorini_engine::{Cell, GameState, Minimax, PlayerId, SearchConfig, WorkerId};

fn mid_game() -> GameState {
    let mut game = GameState::new();
    let wid = |owner, index| WorkerId::new(PlayerId::new(owner), index);
    game.place_worker_at(wid(0, 0), Cell::new(1, 1)).unwrap();
    game.place_worker_at(wid(1, 0), Cell::new(1, 3)).unwrap();
    game.place_worker_at(wid(0, 1), Cell::new(3, 3)).unwrap();
    game.place_worker_at(wid(1, 1), Cell::new(3, 1)).unwrap();

    game.raise_cell(Cell::new(2, 2), 2);
    game.raise_cell(Cell::new(1, 2), 1);
    game.raise_cell(Cell::new(3, 2), 1);
    game.raise_cell(Cell::new(2, 1), 1);
    game
}

fn bench_choose_action(c: &mut Criterion) {
    let game = mid_game();

    for depth in [1u32, 2] {
        c.bench_function(&format!("choose_action_depth_{depth}"), |b| {
            b.iter(|| {
                let mut searcher =
                    Minimax::new(PlayerId::new(0), SearchConfig::default().with_depth(depth));
                black_box(searcher.choose_action(black_box(&game)))
            })
        });
    }
}

fn bench_all_actions(c: &mut Criterion) {
    let game = mid_game();

    c.bench_function("all_actions", |b| {
        b.iter(|| black_box(game.all_actions(black_box(PlayerId::new(0)))))
    });
}

criterion_group!(benches, bench_choose_action, bench_all_actions);
criterion_main!(benches);
