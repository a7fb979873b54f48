//! Sudoku solution generation, validation, and serialization.
//!
//! This crate produces fully populated 9×9 solution grids satisfying the
//! sudoku row/column/box uniqueness constraints, validates arbitrary digit
//! grids against the same constraints, and round-trips solutions through a
//! canonical JSON text form.
//!
//! # Overview
//!
//! - [`Solution`]: the solution value type, owning its backing
//!   [`Grid<Digit>`](ninefold_core::Grid). Created by the generator or by
//!   parsing serialized text; read-only thereafter.
//! - [`SolutionGenerator`]: randomized whole-grid-retry generation with a
//!   bounded restart budget and reproducible seeding.
//! - [`Solution::check`]: the constraint validator used both by tests of
//!   the generator and by gameplay layers validating a candidate board.
//!
//! # Examples
//!
//! ```
//! use ninefold_solution::{Solution, SolutionGenerator};
//!
//! let solution = SolutionGenerator::new().generate_with_seed(42).unwrap();
//! assert!(Solution::check(solution.grid()));
//!
//! // JSON round-trip
//! let restored: Solution = solution.to_json().parse().unwrap();
//! assert_eq!(restored, solution);
//! ```

pub mod generator;
pub mod solution;

// Re-export commonly used types
pub use self::{
    generator::{DEFAULT_MAX_RESTARTS, GenerateError, SolutionGenerator},
    solution::{ParseSolutionError, Solution},
};
