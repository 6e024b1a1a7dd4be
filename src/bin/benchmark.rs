//! Performance benchmark comparing sequential and concurrent stepping

use std::time::Instant;

use life_engine::domain::{Board, RuleSet, available_workers, presets};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_board(size: usize, density: f64) -> Board {
    let mut board = Board::new(size, size, RuleSet::conway());
    board.randomize(density, &mut StdRng::seed_from_u64(size as u64));
    board
}

fn benchmark_sequential(size: usize, density: f64, iterations: u32) -> f64 {
    let mut board = random_board(size, density);

    let start = Instant::now();
    for _ in 0..iterations {
        board.next_generation();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_concurrent(size: usize, density: f64, iterations: u32) -> f64 {
    let mut board = random_board(size, density);

    let start = Instant::now();
    for _ in 0..iterations {
        if let Err(err) = board.next_generation_concurrent() {
            eprintln!("concurrent step failed: {err}");
            return f64::NAN;
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Life Engine Performance Benchmark ===");
    println!("Workers per concurrent step: {}\n", available_workers());

    let sizes = [64, 256, 512, 1024, 2048];
    let iterations = 20;

    for (label, density) in [("Dense (35% alive)", 0.35), ("Sparse (1% alive)", 0.01)] {
        println!("--- {label} ---");
        println!("{:>10} {:>14} {:>14} {:>10}", "Size", "Sequential", "Concurrent", "Speedup");
        println!("{:-<52}", "");

        for size in sizes {
            let sequential_ms = benchmark_sequential(size, density, iterations);
            let concurrent_ms = benchmark_concurrent(size, density, iterations);

            println!(
                "{:>10} {:>11.2} ms {:>11.2} ms {:>9.1}x",
                format!("{}x{}", size, size),
                sequential_ms,
                concurrent_ms,
                sequential_ms / concurrent_ms
            );
        }
        println!();
    }

    println!("=== Dynamic growth (Gosper glider gun, 1000 generations) ===\n");

    let mut board = Board::dynamic(64, 64, RuleSet::conway());
    board.insert_pattern(&presets::glider_gun().matrix());
    let start = Instant::now();
    board.advance(1000);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!(
        "Final board: {}x{}, alive: {}, {:.2} ms/gen",
        board.rows(),
        board.cols(),
        board.alive_count(),
        elapsed_ms / 1000.0
    );
}
