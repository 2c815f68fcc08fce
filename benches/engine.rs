//! Benchmarks for the parallel stepping engine.
//!
//! Run with: `cargo bench`
//! View reports in: `target/criterion/report/index.html`

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use parlife_lib::board::Board;
use parlife_lib::engine::simulate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Board with a seeded random soup in the interior.
fn random_board(width: usize, height: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let board = Board::new(width, height).unwrap();
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if rng.gen_bool(0.35) {
                board.set(x, y, true);
            }
        }
    }
    board
}

/// Benchmark generation throughput across worker counts.
fn bench_simulate(c: &mut Criterion) {
    let width = 258;
    let height = 258;
    let steps = 10;

    let mut group = c.benchmark_group("simulate");
    group.throughput(Throughput::Elements((steps * (width - 2) * (height - 2)) as u64));

    for threads in [1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter_batched(
                || random_board(width, height, 7),
                |board| {
                    simulate(threads, &board, steps).unwrap();
                    black_box(board.live_cells())
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simulate);
criterion_main!(benches);
