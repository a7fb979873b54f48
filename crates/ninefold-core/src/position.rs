//! Board positions and the sudoku relation algebra.
//!
//! A [`Position`] is a (row, column) coordinate pair on the 9×9 board. The
//! module supplies the positional algebra the rest of the engine is built
//! on: box membership, box origins, component-wise offsets, and the
//! "related cells" relation (same row, column, or box).
//!
//! All operations are pure and stateless; positions are plain `Copy` values
//! safe to share across threads without synchronization.

/// A board position identified by row and column, both in the range 0-8.
///
/// Positions are range-checked at construction, so every `Position` held by
/// a caller is a valid board coordinate. Out-of-range input is a programmer
/// error and panics immediately.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
///
/// // Same row => related
/// assert!(pos.is_related(Position::new(4, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// let pos = Position::new(0, 8);
    /// assert_eq!((pos.row(), pos.col()), (0, 8));
    /// ```
    ///
    /// ```should_panic
    /// use ninefold_core::Position;
    ///
    /// // This will panic
    /// let _ = Position::new(9, 0);
    /// ```
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9, "row must be 0-8");
        assert!(col < 9, "column must be 0-8");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index (0-8, row-major) of the 3×3 box containing this
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_index(), 0);
    /// assert_eq!(Position::new(4, 4).box_index(), 4);
    /// assert_eq!(Position::new(8, 2).box_index(), 6);
    /// ```
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the top-left position of the box with the given index.
    ///
    /// This is the inverse mapping of [`box_index`](Self::box_index): the
    /// origin combined with a 0-2 offset on each axis walks the box's cells.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::box_origin(0), Position::new(0, 0));
    /// assert_eq!(Position::box_origin(5), Position::new(3, 6));
    /// assert_eq!(Position::box_origin(8), Position::new(6, 6));
    /// ```
    #[must_use]
    pub const fn box_origin(box_index: u8) -> Self {
        assert!(box_index < 9, "box index must be 0-8");
        Self::new((box_index / 3) * 3, (box_index % 3) * 3)
    }

    /// Returns the component-wise sum of two positions.
    ///
    /// Used to walk a 3×3 block relative to a box origin. Callers are
    /// responsible for only combining an origin with a 0-2 offset; a result
    /// outside the board panics.
    ///
    /// # Panics
    ///
    /// Panics if the summed row or column leaves the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// let origin = Position::box_origin(4);
    /// assert_eq!(origin.offset(Position::new(1, 2)), Position::new(4, 5));
    /// ```
    #[must_use]
    pub const fn offset(self, other: Self) -> Self {
        Self::new(self.row + other.row, self.col + other.col)
    }

    /// Returns `true` if both positions lie in the same row.
    #[must_use]
    pub const fn same_row(self, other: Self) -> bool {
        self.row == other.row
    }

    /// Returns `true` if both positions lie in the same column.
    #[must_use]
    pub const fn same_col(self, other: Self) -> bool {
        self.col == other.col
    }

    /// Returns `true` if both positions lie in the same 3×3 box.
    #[must_use]
    pub const fn same_box(self, other: Self) -> bool {
        self.box_index() == other.box_index()
    }

    /// Returns `true` if the positions share a row, a column, or a box.
    ///
    /// A position is related to itself; callers wanting "other related
    /// cells" must exclude the position explicitly.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// let pos = Position::new(0, 0);
    /// assert!(pos.is_related(Position::new(0, 7))); // same row
    /// assert!(pos.is_related(Position::new(1, 1))); // same box
    /// assert!(!pos.is_related(Position::new(3, 3)));
    /// ```
    #[must_use]
    pub const fn is_related(self, other: Self) -> bool {
        self.same_row(other) || self.same_col(other) || self.same_box(other)
    }

    /// Flat row-major index into an 81-element backing store.
    pub(crate) fn index(self) -> usize {
        usize::from(self.row) * 9 + usize::from(self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(0, 8));
        assert_eq!(Position::ALL[9], Position::new(1, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(2, 8).box_index(), 2);
        assert_eq!(Position::new(3, 3).box_index(), 4);
        assert_eq!(Position::new(5, 5).box_index(), 4);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_box_origin_round_trip() {
        for box_index in 0..9 {
            let origin = Position::box_origin(box_index);
            assert_eq!(origin.box_index(), box_index);
            assert_eq!(origin.row() % 3, 0);
            assert_eq!(origin.col() % 3, 0);
        }
    }

    #[test]
    fn test_offset_walks_a_box() {
        let origin = Position::box_origin(8);
        assert_eq!(origin.offset(Position::new(0, 0)), Position::new(6, 6));
        assert_eq!(origin.offset(Position::new(2, 2)), Position::new(8, 8));
    }

    #[test]
    fn test_relation_algebra() {
        // Same row
        assert!(Position::new(4, 4).is_related(Position::new(4, 7)));
        // Same box
        assert!(Position::new(0, 0).is_related(Position::new(1, 1)));
        // Different row, column, and box
        assert!(!Position::new(0, 0).is_related(Position::new(3, 3)));
        // Self is related via row/col/box equality
        assert!(Position::new(5, 2).is_related(Position::new(5, 2)));
    }

    #[test]
    fn test_relation_is_symmetric() {
        for &a in &Position::ALL {
            for &b in &Position::ALL {
                assert_eq!(a.is_related(b), b.is_related(a));
            }
        }
    }

    #[test]
    #[should_panic(expected = "row must be 0-8")]
    fn test_new_rejects_row_nine() {
        let _ = Position::new(9, 0);
    }

    #[test]
    #[should_panic(expected = "column must be 0-8")]
    fn test_new_rejects_col_nine() {
        let _ = Position::new(0, 9);
    }

    #[test]
    #[should_panic(expected = "box index must be 0-8")]
    fn test_box_origin_rejects_nine() {
        let _ = Position::box_origin(9);
    }

    #[test]
    #[should_panic(expected = "row must be 0-8")]
    fn test_offset_rejects_escape_from_board() {
        let _ = Position::new(8, 0).offset(Position::new(1, 0));
    }
}
