//! Query scopes over the 9×9 board.
//!
//! A [`Scope`] names the unit a grid query or transform operates over: a
//! row, a column, a 3×3 box, or the whole board. Every scope yields its
//! positions in one fixed, deterministic order, so predicates with side
//! effects observe a stable visitation sequence.

use crate::Position;

/// The unit over which a grid query or transform operates.
///
/// The traversal order is fixed per scope kind:
///
/// - [`Row`](Self::Row): column order, left to right.
/// - [`Column`](Self::Column): row order, top to bottom.
/// - [`Box`](Self::Box): the box's own row-major order.
/// - [`Grid`](Self::Grid): whole-board row-major order.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Position, Scope};
///
/// let positions: Vec<_> = Scope::Box { index: 4 }.positions().collect();
/// assert_eq!(positions[0], Position::new(3, 3));
/// assert_eq!(positions[8], Position::new(5, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// A single row.
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A single column.
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box.
    Box {
        /// Box index (0-8, row-major).
        index: u8,
    },
    /// The whole board.
    Grid,
}

impl Scope {
    /// Array containing all row scopes (0-8).
    pub const ROWS: [Self; 9] = [
        Self::Row { row: 0 },
        Self::Row { row: 1 },
        Self::Row { row: 2 },
        Self::Row { row: 3 },
        Self::Row { row: 4 },
        Self::Row { row: 5 },
        Self::Row { row: 6 },
        Self::Row { row: 7 },
        Self::Row { row: 8 },
    ];

    /// Array containing all column scopes (0-8).
    pub const COLUMNS: [Self; 9] = [
        Self::Column { col: 0 },
        Self::Column { col: 1 },
        Self::Column { col: 2 },
        Self::Column { col: 3 },
        Self::Column { col: 4 },
        Self::Column { col: 5 },
        Self::Column { col: 6 },
        Self::Column { col: 7 },
        Self::Column { col: 8 },
    ];

    /// Array containing all box scopes (0-8).
    pub const BOXES: [Self; 9] = [
        Self::Box { index: 0 },
        Self::Box { index: 1 },
        Self::Box { index: 2 },
        Self::Box { index: 3 },
        Self::Box { index: 4 },
        Self::Box { index: 5 },
        Self::Box { index: 6 },
        Self::Box { index: 7 },
        Self::Box { index: 8 },
    ];

    /// Number of cells in this scope: 81 for [`Grid`](Self::Grid), 9
    /// otherwise.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        match self {
            Self::Grid => 81,
            Self::Row { .. } | Self::Column { .. } | Self::Box { .. } => 9,
        }
    }

    /// Returns the `i`-th position of this scope in its visitation order.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than [`cell_count`](Self::cell_count).
    #[must_use]
    pub fn position_at(self, i: usize) -> Position {
        assert!(
            i < self.cell_count(),
            "cell index {i} out of range for {self:?}"
        );
        #[expect(clippy::cast_possible_truncation)]
        let i = i as u8;
        match self {
            Self::Row { row } => Position::new(row, i),
            Self::Column { col } => Position::new(i, col),
            Self::Box { index } => {
                Position::box_origin(index).offset(Position::new(i / 3, i % 3))
            }
            Self::Grid => Position::new(i / 9, i % 9),
        }
    }

    /// Returns an iterator over the scope's positions in visitation order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Scope;
    ///
    /// assert_eq!(Scope::Row { row: 3 }.positions().count(), 9);
    /// assert_eq!(Scope::Grid.positions().count(), 81);
    /// ```
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.cell_count()).map(move |i| self.position_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_visitation_order() {
        let positions: Vec<_> = Scope::Row { row: 4 }.positions().collect();
        let expected: Vec<_> = (0..9).map(|col| Position::new(4, col)).collect();
        assert_eq!(positions, expected);
    }

    #[test]
    fn test_column_visitation_order() {
        let positions: Vec<_> = Scope::Column { col: 2 }.positions().collect();
        let expected: Vec<_> = (0..9).map(|row| Position::new(row, 2)).collect();
        assert_eq!(positions, expected);
    }

    #[test]
    fn test_box_visitation_order() {
        let positions: Vec<_> = Scope::Box { index: 4 }.positions().collect();
        let expected = [
            Position::new(3, 3),
            Position::new(3, 4),
            Position::new(3, 5),
            Position::new(4, 3),
            Position::new(4, 4),
            Position::new(4, 5),
            Position::new(5, 3),
            Position::new(5, 4),
            Position::new(5, 5),
        ];
        assert_eq!(positions, expected);
    }

    #[test]
    fn test_grid_visitation_order() {
        let positions: Vec<_> = Scope::Grid.positions().collect();
        assert_eq!(positions.len(), 81);
        assert_eq!(positions, Position::ALL);
    }

    #[test]
    fn test_scope_constants_cover_the_board() {
        for scopes in [Scope::ROWS, Scope::COLUMNS, Scope::BOXES] {
            let mut seen = [false; 81];
            for scope in scopes {
                for pos in scope.positions() {
                    assert!(!seen[pos.index()], "{pos:?} visited twice");
                    seen[pos.index()] = true;
                }
            }
            assert!(seen.iter().all(|&v| v));
        }
    }

    #[test]
    #[should_panic(expected = "cell index 9 out of range")]
    fn test_position_at_rejects_out_of_range() {
        let _ = Scope::Row { row: 0 }.position_at(9);
    }
}
