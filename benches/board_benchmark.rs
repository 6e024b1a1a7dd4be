//! Benchmarks for generation stepping.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use life_engine::domain::{Board, RuleSet, presets};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_board(size: usize) -> Board {
    let mut board = Board::new(size, size, RuleSet::conway());
    board.randomize(0.3, &mut StdRng::seed_from_u64(42));
    board
}

fn bench_sequential_256(c: &mut Criterion) {
    let mut board = random_board(256);
    c.bench_function("sequential_256x256", |b| {
        b.iter(|| {
            board.next_generation();
            black_box(board.alive_count())
        })
    });
}

fn bench_concurrent_256(c: &mut Criterion) {
    let mut board = random_board(256);
    c.bench_function("concurrent_256x256", |b| {
        b.iter(|| {
            board.next_generation_concurrent().unwrap();
            black_box(board.alive_count())
        })
    });
}

fn bench_sparse_glider(c: &mut Criterion) {
    c.bench_function("sparse_glider_1024x1024_50_gens", |b| {
        b.iter(|| {
            let mut board = Board::new(1024, 1024, RuleSet::conway());
            board.insert_pattern(&presets::glider().matrix());
            board.advance(50);
            black_box(board.alive_count())
        })
    });
}

criterion_group!(
    benches,
    bench_sequential_256,
    bench_concurrent_256,
    bench_sparse_glider
);
criterion_main!(benches);
