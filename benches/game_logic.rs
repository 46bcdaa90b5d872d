use criterion::{black_box, criterion_group, criterion_main, Criterion};

use orbmatch::types::CellRef;
use orbmatch::{collapse, find_matches, Board, ResolutionEngine, SimpleRng, SwapOutcome};

fn settled_board(seed: u32) -> (ResolutionEngine, Board) {
    let mut engine = ResolutionEngine::new(seed);
    let board = engine.new_board(7, 9);
    (engine, board)
}

fn bench_find_matches(c: &mut Criterion) {
    let (_, board) = settled_board(7);
    c.bench_function("find_matches 7x9", |b| {
        b.iter(|| find_matches(black_box(&board)))
    });

    let mut engine = ResolutionEngine::new(7);
    let big = engine.new_board(32, 32);
    c.bench_function("find_matches 32x32", |b| {
        b.iter(|| find_matches(black_box(&big)))
    });
}

fn bench_collapse(c: &mut Criterion) {
    let (_, board) = settled_board(11);
    let row: Vec<CellRef> = (0..7).map(|col| CellRef::new(4, col)).collect();
    c.bench_function("collapse after row clear 7x9", |b| {
        b.iter(|| {
            let mut scratch = board.clone();
            scratch.clear_cells(&row);
            let mut rng = SimpleRng::new(1);
            collapse(black_box(&mut scratch), &mut rng, 5)
        })
    });
}

fn bench_cascade_drain(c: &mut Criterion) {
    c.bench_function("swap + cascade drain 4x4", |b| {
        b.iter(|| {
            let mut engine = ResolutionEngine::new(1);
            let mut board = Board::from_rows(&[
                vec![1, 0, 2, 3],
                vec![0, 1, 3, 2],
                vec![2, 0, 1, 3],
                vec![3, 1, 2, 0],
            ]);
            let outcome =
                engine.attempt_swap(&mut board, CellRef::new(1, 0), CellRef::new(1, 1));
            assert_eq!(outcome, SwapOutcome::CascadeStarted);
            while engine.step(&mut board) {}
            black_box(engine.score())
        })
    });
}

fn bench_new_board(c: &mut Criterion) {
    c.bench_function("new_board 7x9 settled", |b| {
        let mut seed = 0u32;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut engine = ResolutionEngine::new(seed);
            black_box(engine.new_board(7, 9))
        })
    });
}

criterion_group!(
    benches,
    bench_find_matches,
    bench_collapse,
    bench_cascade_drain,
    bench_new_board
);
criterion_main!(benches);
