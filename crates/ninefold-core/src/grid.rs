//! A value-like 9×9 typed grid with scoped queries and transforms.
//!
//! [`Grid`] stores 81 cells of an arbitrary element type in a flat
//! row-major backing store. Grids are immutable by convention: every
//! transform returns a new grid and no public operation mutates the
//! receiver, so a grid instance is safe to share across concurrent
//! readers.
//!
//! Queries and transforms are scoped through [`Scope`], which dispatches
//! all 9×9 traversal through one iteration routine with a fixed
//! visitation order per scope kind.

use std::fmt::Display;

use crate::{Position, Scope};

/// Shape violation raised when constructing a grid from row data.
///
/// Malformed input (e.g. a truncated serialized grid) fails fast at
/// construction time rather than indexing out of bounds later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShapeError {
    /// The input does not contain exactly 9 rows.
    #[display("expected 9 rows, got {rows}")]
    RowCount {
        /// Number of rows provided.
        rows: usize,
    },
    /// A row does not contain exactly 9 cells.
    #[display("row {row} has {cols} cells, expected 9")]
    ColumnCount {
        /// Index of the offending row.
        row: usize,
        /// Number of cells that row provided.
        cols: usize,
    },
}

/// A 9×9 grid of values of type `T`.
///
/// The element type is fixed per grid instance. Structural queries
/// ([`every`](Self::every), [`some`](Self::some), [`count`](Self::count)),
/// relation comparisons ([`compare_related`](Self::compare_related) and
/// friends), copy-on-write transforms ([`map`](Self::map),
/// [`edit`](Self::edit)), and text rendering ([`join`](Self::join)) all
/// operate over a [`Scope`] or a cell's related set.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Grid, Position, Scope};
///
/// // Grid of row indices
/// let grid = Grid::from_fn(|pos| pos.row());
///
/// assert!(grid.every(Scope::Row { row: 3 }, |&cell, _| cell == 3));
/// assert!(grid.some(Scope::Column { col: 0 }, |&cell, _| cell == 8));
/// assert_eq!(grid.count(|&cell, _| cell == 0), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Box<[T; 81]>,
}

impl<T> Grid<T> {
    /// Creates a grid by calling `init` for every position in row-major
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Grid, Position};
    ///
    /// let grid = Grid::from_fn(|pos| pos.row() * 9 + pos.col());
    /// assert_eq!(*grid.get(Position::new(2, 5)), 23);
    /// ```
    pub fn from_fn(mut init: impl FnMut(Position) -> T) -> Self {
        let cells = Box::new(std::array::from_fn(|i| init(Position::ALL[i])));
        Self { cells }
    }

    /// Builds a grid from row data, validating the 9×9 shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if the input does not contain exactly 9 rows
    /// of exactly 9 cells each.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Grid, ShapeError};
    ///
    /// let grid = Grid::from_rows(vec![vec![0_u8; 9]; 9]).unwrap();
    /// assert_eq!(grid.count(|&cell, _| cell == 0), 81);
    ///
    /// let err = Grid::from_rows(vec![vec![0_u8; 9]; 3]).unwrap_err();
    /// assert_eq!(err, ShapeError::RowCount { rows: 3 });
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        if rows.len() != 9 {
            return Err(ShapeError::RowCount { rows: rows.len() });
        }
        let mut cells = Vec::with_capacity(81);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != 9 {
                return Err(ShapeError::ColumnCount {
                    row,
                    cols: cols.len(),
                });
            }
            cells.extend(cols);
        }
        let cells = match cells.into_boxed_slice().try_into() {
            Ok(cells) => cells,
            Err(_) => unreachable!("9 rows of 9 cells always total 81"),
        };
        Ok(Self { cells })
    }

    /// Returns the cell at `pos`.
    ///
    /// Positions are range-checked at construction, so this never fails for
    /// a well-formed [`Position`].
    #[must_use]
    pub fn get(&self, pos: Position) -> &T {
        &self.cells[pos.index()]
    }

    /// Returns `true` if `pred` holds for every cell of `scope`.
    ///
    /// Cells are visited in the scope's fixed order (see [`Scope`]) and
    /// evaluation short-circuits on the first failing cell.
    pub fn every(&self, scope: Scope, mut pred: impl FnMut(&T, Position) -> bool) -> bool {
        scope.positions().all(|pos| pred(self.get(pos), pos))
    }

    /// Returns `true` if `pred` holds for at least one cell of `scope`.
    ///
    /// Cells are visited in the scope's fixed order and evaluation
    /// short-circuits on the first passing cell.
    pub fn some(&self, scope: Scope, mut pred: impl FnMut(&T, Position) -> bool) -> bool {
        scope.positions().any(|pos| pred(self.get(pos), pos))
    }

    /// Counts the cells of the whole grid for which `pred` holds, visiting
    /// in row-major order.
    pub fn count(&self, mut pred: impl FnMut(&T, Position) -> bool) -> usize {
        Scope::Grid
            .positions()
            .filter(|&pos| pred(self.get(pos), pos))
            .count()
    }

    /// Compares the cell at `pos` against every *other* related cell.
    ///
    /// `compare(candidate_cell, this_cell, candidate_pos)` is evaluated for
    /// every position related to `pos` (same row, column, or box) excluding
    /// `pos` itself, in row-major order. Returns `false` on the first
    /// failing comparison, `true` if all pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Grid, Position};
    ///
    /// let grid = Grid::from_fn(|pos| pos.row());
    /// // Every other cell in row 0 also holds 0, as does the rest of box 0;
    /// // column 0 holds 1-8, so a "differs" comparison fails.
    /// assert!(!grid.compare_related(Position::new(0, 0), |other, this, _| other != this));
    /// ```
    pub fn compare_related(
        &self,
        pos: Position,
        compare: impl FnMut(&T, &T, Position) -> bool,
    ) -> bool {
        self.compare_by(pos, Position::is_related, compare)
    }

    /// [`compare_related`](Self::compare_related) restricted to the row of
    /// `pos`, still excluding `pos` itself.
    pub fn compare_row(&self, pos: Position, compare: impl FnMut(&T, &T, Position) -> bool) -> bool {
        self.compare_by(pos, Position::same_row, compare)
    }

    /// [`compare_related`](Self::compare_related) restricted to the column
    /// of `pos`, still excluding `pos` itself.
    pub fn compare_column(
        &self,
        pos: Position,
        compare: impl FnMut(&T, &T, Position) -> bool,
    ) -> bool {
        self.compare_by(pos, Position::same_col, compare)
    }

    /// [`compare_related`](Self::compare_related) restricted to the box of
    /// `pos`, still excluding `pos` itself.
    pub fn compare_box(&self, pos: Position, compare: impl FnMut(&T, &T, Position) -> bool) -> bool {
        self.compare_by(pos, Position::same_box, compare)
    }

    fn compare_by(
        &self,
        pos: Position,
        relation: impl Fn(Position, Position) -> bool,
        mut compare: impl FnMut(&T, &T, Position) -> bool,
    ) -> bool {
        let cell = self.get(pos);
        Scope::Grid
            .positions()
            .filter(|&candidate| candidate != pos && relation(pos, candidate))
            .all(|candidate| compare(self.get(candidate), cell, candidate))
    }

    /// Returns a new grid with every cell replaced by `f(cell, pos)`.
    ///
    /// Unlike the scoped [`map`](Self::map), this whole-grid variant may
    /// change the element type.
    pub fn map_all<U>(&self, mut f: impl FnMut(&T, Position) -> U) -> Grid<U> {
        Grid::from_fn(|pos| f(self.get(pos), pos))
    }

    /// Iterates over all cells with their positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        Position::ALL.iter().map(|&pos| (pos, self.get(pos)))
    }

    /// Iterates over the 9 rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(9)
    }
}

impl<T: Clone> Grid<T> {
    /// Returns a new grid where cells within `scope` are replaced by
    /// `f(cell, pos)` and all other cells are copied unchanged.
    ///
    /// The receiver is never mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Grid, Position, Scope};
    ///
    /// let grid = Grid::from_fn(|_| 0);
    /// let marked = grid.map(Scope::Row { row: 2 }, |_, _| 1);
    ///
    /// assert_eq!(grid.count(|&cell, _| cell == 1), 0);
    /// assert_eq!(marked.count(|&cell, _| cell == 1), 9);
    /// assert_eq!(*marked.get(Position::new(2, 4)), 1);
    /// ```
    #[must_use]
    pub fn map(&self, scope: Scope, mut f: impl FnMut(&T, Position) -> T) -> Self {
        let mut next = self.clone();
        for pos in scope.positions() {
            next.cells[pos.index()] = f(self.get(pos), pos);
        }
        next
    }

    /// Returns a new grid where cells satisfying `pred` are replaced by
    /// `f(cell, pos)`, scanning the whole grid in row-major order.
    #[must_use]
    pub fn map_filtered(
        &self,
        mut pred: impl FnMut(&T, Position) -> bool,
        mut f: impl FnMut(&T, Position) -> T,
    ) -> Self {
        let mut next = self.clone();
        for pos in Scope::Grid.positions() {
            let cell = self.get(pos);
            if pred(cell, pos) {
                next.cells[pos.index()] = f(cell, pos);
            }
        }
        next
    }

    /// Returns a new grid where exactly the cell at `pos` is replaced by
    /// `f(current, pos)`; the single-cell specialization of
    /// [`map`](Self::map).
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Grid, Position};
    ///
    /// let grid = Grid::from_fn(|_| 0);
    /// let edited = grid.edit(Position::new(4, 4), |&cell, _| cell + 7);
    ///
    /// assert_eq!(*grid.get(Position::new(4, 4)), 0);
    /// assert_eq!(*edited.get(Position::new(4, 4)), 7);
    /// assert_eq!(edited.count(|&cell, _| cell == 7), 1);
    /// ```
    #[must_use]
    pub fn edit(&self, pos: Position, f: impl FnOnce(&T, Position) -> T) -> Self {
        let mut next = self.clone();
        next.cells[pos.index()] = f(self.get(pos), pos);
        next
    }
}

impl<T: Display> Grid<T> {
    /// Renders the cells of `scope` as a string.
    ///
    /// `col_sep` separates cells within a line and `row_sep` separates
    /// lines: the whole grid renders as 9 lines of 9, a box as 3 lines of
    /// 3, and a row or column as a single line of 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Grid, Scope};
    ///
    /// let grid = Grid::from_fn(|pos| pos.col());
    /// assert_eq!(grid.join(Scope::Row { row: 0 }, "", ""), "012345678");
    /// assert_eq!(grid.join(Scope::Box { index: 0 }, " ", "/"), "0 1 2/0 1 2/0 1 2");
    /// ```
    #[must_use]
    pub fn join(&self, scope: Scope, col_sep: &str, row_sep: &str) -> String {
        let line_len = match scope {
            Scope::Box { .. } => 3,
            Scope::Row { .. } | Scope::Column { .. } | Scope::Grid => 9,
        };
        let mut out = String::new();
        for (i, pos) in scope.positions().enumerate() {
            if i > 0 {
                out.push_str(if i % line_len == 0 { row_sep } else { col_sep });
            }
            out.push_str(&self.get(pos).to_string());
        }
        out
    }
}
