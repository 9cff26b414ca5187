use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hermit::agents::{CenterHeuristic, PhaseHeuristic};
use hermit::game::Board;
use hermit::search::{alphabeta, deepening, minimax, Clock};

fn midgame() -> Board {
    Board::parse(
        r#"
        . # . . . . .
        . . . # . . .
        . . 1 . . . .
        . # . . # . .
        . . . . 2 . .
        . . # . . . .
        . . . . . # ."#,
    )
    .unwrap()
}

fn minimax_depth_4(c: &mut Criterion) {
    let board = midgame();
    let time_left = || f64::INFINITY;
    let clock = Clock::new(&time_left, 10.0);
    let heuristic = CenterHeuristic::default();

    c.bench_function("minimax_depth_4", |b| {
        b.iter(|| minimax(black_box(&board), 4, &heuristic, &clock))
    });
}

fn alphabeta_depth_4(c: &mut Criterion) {
    let board = midgame();
    let time_left = || f64::INFINITY;
    let clock = Clock::new(&time_left, 10.0);
    let heuristic = CenterHeuristic::default();

    c.bench_function("alphabeta_depth_4", |b| {
        b.iter(|| alphabeta(black_box(&board), 4, &heuristic, &clock))
    });
}

fn deepening_budget_50ms(c: &mut Criterion) {
    let board = midgame();
    let heuristic = PhaseHeuristic;

    c.bench_function("deepening_budget_50ms", |b| {
        b.iter(|| {
            let deadline = std::time::Instant::now() + std::time::Duration::from_millis(50);
            let time_left = move || {
                deadline
                    .saturating_duration_since(std::time::Instant::now())
                    .as_secs_f64()
                    * 1000.0
            };
            let clock = Clock::new(&time_left, 10.0);
            deepening(black_box(&board), 25, &heuristic, &clock)
        })
    });
}

criterion_group!(
    benches,
    minimax_depth_4,
    alphabeta_depth_4,
    deepening_budget_50ms
);
criterion_main!(benches);
