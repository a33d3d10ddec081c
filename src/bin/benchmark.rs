//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;

use aging_life::{Algorithm, Grid};

const SEED: u64 = 0x5eed;

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let Ok(mut grid) = Grid::random_seeded(size, size, 0.15, SEED) else {
        return 0.0;
    };

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve(algorithm);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Aging Life Step Benchmark ===\n");

    let sizes = [60, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }

    let cells = 2000 * 2000;
    let parallel_ms = benchmark(Algorithm::Parallel, 2000, iterations);
    println!(
        "\nParallel at 2000x2000: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
