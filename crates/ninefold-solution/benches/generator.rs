//! Benchmarks for sudoku solution generation.
//!
//! Measures the complete whole-grid-retry generation process, including
//! restarts, over a set of fixed seeds for reproducibility.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ninefold_solution::SolutionGenerator;

const SEEDS: [u64; 3] = [0xc1d4_4bd6, 0xa2b3_c4d5_e6f7_a8b9, 0x1234_5678_90ab_cdef];

fn bench_generate(c: &mut Criterion) {
    let generator = SolutionGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("generate", format!("seed_{i}")),
            &seed,
            |b, &seed| {
                b.iter(|| generator.generate_with_seed(hint::black_box(seed)));
            },
        );
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
