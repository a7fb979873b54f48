//! Example demonstrating sudoku solution generation.
//!
//! Generates one or more fully filled, rule-valid solution grids and
//! prints both the human-readable layout and the canonical JSON form.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_solution
//! ```
//!
//! Reproducible output from a seed (subsequent solutions use seed+1,
//! seed+2, ...):
//!
//! ```sh
//! cargo run --example generate_solution -- --seed 42 --count 3
//! ```
//!
//! Restart activity is logged at trace level:
//!
//! ```sh
//! RUST_LOG=trace cargo run --example generate_solution
//! ```

use std::process;

use clap::Parser;
use ninefold_solution::{Solution, SolutionGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for reproducible generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of solutions to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = SolutionGenerator::new();

    for i in 0..args.count {
        let result = match args.seed {
            Some(seed) => generator.generate_with_seed(seed + i),
            None => generator.generate(),
        };
        let solution = match result {
            Ok(solution) => solution,
            Err(err) => {
                eprintln!("generation failed: {err}");
                process::exit(1);
            }
        };
        assert!(Solution::check(solution.grid()));

        println!("{solution}");
        println!();
        println!("JSON: {}", solution.to_json());
        if i + 1 < args.count {
            println!();
        }
    }
}
