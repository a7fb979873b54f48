//! Core data structures for the ninefold sudoku engine.
//!
//! This crate provides the positional algebra and the generic 9×9 grid that
//! every higher-level sudoku feature (solution generation, validation,
//! note-taking, hints) is built from.
//!
//! # Overview
//!
//! The crate is organized around three main concepts:
//!
//! 1. **Position algebra** - Pure coordinate arithmetic
//!    - [`position`]: Board positions with row/column/box membership and the
//!      "related cells" relation.
//!
//! 2. **Scoped traversal** - A closed set of query scopes
//!    - [`scope`]: The [`Scope`] enum naming a row, a column, a 3×3 box, or
//!      the whole board, each with a fixed deterministic visitation order.
//!
//! 3. **Typed grid** - A value-like 9×9 container
//!    - [`grid`]: [`Grid`], an immutable-by-convention container of an
//!      arbitrary element type with structural queries (`every`/`some`/
//!      `count`), copy-on-write transforms (`map`/`edit`), and text
//!      rendering (`join`).
//!    - [`digit`]: Type-safe representation of sudoku digits 1-9.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Grid, Position, Scope};
//!
//! // Build a grid where each cell holds its own box index
//! let grid = Grid::from_fn(|pos| pos.box_index());
//!
//! // The center box holds index 4 everywhere
//! assert!(grid.every(Scope::Box { index: 4 }, |&cell, _| cell == 4));
//!
//! // Transforms never mutate the receiver
//! let edited = grid.edit(Position::new(0, 0), |_, _| 9);
//! assert_eq!(*grid.get(Position::new(0, 0)), 0);
//! assert_eq!(*edited.get(Position::new(0, 0)), 9);
//! ```

pub mod digit;
pub mod grid;
pub mod position;
pub mod scope;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    grid::{Grid, ShapeError},
    position::Position,
    scope::Scope,
};
