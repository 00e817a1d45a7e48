//! Performance benchmark comparing the stepping algorithms

use rand::{SeedableRng, rngs::StdRng};
use sparse_life::application::{DEFAULT_GENERATIONS, Runner};
use sparse_life::domain::{Algorithm, CellSet, presets, random_soup};
use std::time::Instant;

const SEED: u64 = 0x5eed;
const DENSITY: f64 = 0.3;

fn benchmark(algorithm: Algorithm, initial: &CellSet, iterations: u32) -> (f64, usize) {
    let mut cells = initial.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        cells = algorithm.step(&cells);
    }
    let ms_per_gen = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms_per_gen, cells.len())
}

fn main() {
    println!("=== Sparse Life Performance Benchmark ===\n");

    let sizes = [32, 64, 128, 256, 512, 1024];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Size", "Population", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<60}", "");

    for size in sizes {
        let mut rng = StdRng::seed_from_u64(SEED);
        let soup = random_soup(&mut rng, size, size, DENSITY);

        let (serial_ms, serial_pop) = benchmark(Algorithm::Serial, &soup, iterations);
        let (parallel_ms, parallel_pop) = benchmark(Algorithm::Parallel, &soup, iterations);
        assert_eq!(serial_pop, parallel_pop, "algorithms diverged at {size}x{size}");

        println!(
            "{:>10} {:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            soup.len(),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Far from the origin ===\n");

    // Same soup shifted next to the i64 corner: the sparse set does not care
    let mut rng = StdRng::seed_from_u64(SEED);
    let soup = random_soup(&mut rng, 256, 256, DENSITY);
    let shifted: CellSet = soup
        .iter()
        .filter_map(|cell| cell.offset(i64::MAX - 256, i64::MAX - 256))
        .collect();

    let (near_ms, _) = benchmark(Algorithm::Serial, &soup, iterations);
    let (far_ms, _) = benchmark(Algorithm::Serial, &shifted, iterations);
    println!("Origin:    {:.2} ms/gen", near_ms);
    println!("i64 edge:  {:.2} ms/gen", far_ms);

    println!("\n=== Presets after {} generations ===\n", DEFAULT_GENERATIONS);
    println!("{:<12} {:>8} {:>8}  {}", "Pattern", "Start", "End", "Description");
    println!("{:-<60}", "");

    let runner = Runner::default();
    for pattern in presets::all_patterns() {
        let start = pattern.cells.len();
        let end = runner.run(pattern.cells).len();
        println!("{:<12} {:>8} {:>8}  {}", pattern.name, start, end, pattern.description);
    }
}
