//! Benchmarks for the sliding-tile solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use npuzzle::input::parse_board;
use npuzzle::{Board, Solver};

/// 14 moves from the goal.
const DEEP_3X3: [[u16; 3]; 3] = [[8, 1, 3], [4, 0, 2], [7, 6, 5]];

/// 9 moves from the goal.
const SHALLOW_4X4: [[u16; 4]; 4] = [[5, 1, 2, 3], [9, 6, 7, 4], [13, 10, 11, 8], [0, 14, 15, 12]];

/// Benchmark solving a 3x3 board end to end.
fn bench_solve_3x3(c: &mut Criterion) {
    let board = Board::new(&DEEP_3X3).unwrap();

    c.bench_function("solve_3x3_14_moves", |b| {
        b.iter(|| Solver::new(black_box(board.clone())))
    });
}

/// Benchmark solving a 4x4 board end to end.
fn bench_solve_4x4(c: &mut Criterion) {
    let board = Board::new(&SHALLOW_4X4).unwrap();

    c.bench_function("solve_4x4_9_moves", |b| {
        b.iter(|| Solver::new(black_box(board.clone())))
    });
}

/// Benchmark detecting an unsolvable board through its twin.
fn bench_unsolvable(c: &mut Criterion) {
    let board = Board::new(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();

    let mut group = c.benchmark_group("unsolvable");
    group.sample_size(10);
    group.bench_function("puzzle07", |b| {
        b.iter(|| Solver::new(black_box(board.clone())))
    });
    group.finish();
}

/// Benchmark generating the neighbours of an interior blank.
fn bench_neighbors(c: &mut Criterion) {
    let board = Board::new(&DEEP_3X3).unwrap();

    c.bench_function("neighbors", |b| b.iter(|| black_box(&board).neighbors()));
}

/// Benchmark the uncached Manhattan score of a fresh board.
fn bench_manhattan(c: &mut Criterion) {
    let board = Board::goal(16).unwrap().twin();

    c.bench_function("manhattan_16x16", |b| {
        b.iter(|| black_box(board.clone()).manhattan())
    });
}

/// Benchmark parsing a board file.
fn bench_parse(c: &mut Criterion) {
    let text = Board::goal(16).unwrap().to_string();

    c.bench_function("parse_16x16", |b| b.iter(|| parse_board(black_box(&text))));
}

criterion_group!(
    benches,
    bench_solve_3x3,
    bench_solve_4x4,
    bench_unsolvable,
    bench_neighbors,
    bench_manhattan,
    bench_parse
);
criterion_main!(benches);
