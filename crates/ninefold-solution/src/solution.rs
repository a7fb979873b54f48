//! The solution value type: validation and canonical (de)serialization.

use std::{fmt, str::FromStr};

use ninefold_core::{Digit, Grid, grid::ShapeError};

use crate::generator::SolutionGenerator;

/// Error raised when parsing a serialized solution fails.
///
/// This is the only recoverable error of the solution component: a
/// collaborator loading a persisted solution is expected to catch it and
/// fall back to generating a fresh one. The offending input text is always
/// attached; for JSON and shape failures the underlying cause is available
/// through [`Error::source`](std::error::Error::source).
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseSolutionError {
    /// The input is not valid JSON.
    #[display("invalid solution {text:?}: not a JSON digit grid")]
    Json {
        /// The offending input text.
        text: String,
        /// The underlying JSON parse failure.
        source: serde_json::Error,
    },
    /// The JSON value is not a 9×9 structure.
    #[display("invalid solution {text:?}: {source}")]
    Shape {
        /// The offending input text.
        text: String,
        /// The shape violation reported by grid construction.
        source: ShapeError,
    },
    /// A cell value is outside the range 1-9.
    #[display("invalid solution {text:?}: cell ({row}, {col}) holds {value}, expected 1-9")]
    Digit {
        /// The offending input text.
        text: String,
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The out-of-range value.
        value: u64,
    },
}

impl ParseSolutionError {
    /// Returns the original input text that failed to parse.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Json { text, .. } | Self::Shape { text, .. } | Self::Digit { text, .. } => text,
        }
    }
}

/// A fully populated 9×9 grid of digits 1-9 satisfying the sudoku
/// row/column/box uniqueness constraints.
///
/// A solution is created either by the generator (fresh, random) or by
/// parsing previously serialized text, and is consumed read-only
/// thereafter: deriving a puzzle or checking a guess produces new values,
/// never edits the solution. The solution owns its backing grid
/// exclusively; [`to_grid`](Self::to_grid) hands out independent copies.
///
/// Parsing does **not** re-validate the sudoku constraints: serialized
/// solutions come from previously generated and persisted data and are
/// trusted. Use [`check`](Self::check) to validate untrusted grids.
///
/// # Examples
///
/// ```
/// use ninefold_solution::{Solution, SolutionGenerator};
///
/// let solution = SolutionGenerator::new().generate_with_seed(7).unwrap();
/// assert!(solution.is_valid());
///
/// let json = solution.to_json();
/// let restored: Solution = json.parse().unwrap();
/// assert_eq!(restored, solution);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    grid: Grid<Digit>,
}

impl Solution {
    pub(crate) fn from_grid(grid: Grid<Digit>) -> Self {
        Self { grid }
    }

    /// Generates a fresh random solution with the default generator.
    ///
    /// # Panics
    ///
    /// Panics if generation exhausts its restart budget, which is
    /// practically unreachable for a 9×9 board (see
    /// [`SolutionGenerator`]). Callers that must handle the failure use
    /// the generator API directly.
    #[must_use]
    pub fn generate() -> Self {
        SolutionGenerator::new()
            .generate()
            .expect("solution generation exhausted its restart budget")
    }

    /// Borrows the backing grid.
    #[must_use]
    pub fn grid(&self) -> &Grid<Digit> {
        &self.grid
    }

    /// Returns an independent copy of the backing grid.
    ///
    /// Mutating (or transforming) the copy can never corrupt this
    /// solution.
    #[must_use]
    pub fn to_grid(&self) -> Grid<Digit> {
        self.grid.clone()
    }

    /// Checks a digit grid against the sudoku uniqueness constraints.
    ///
    /// For every position in row-major order, every *other* related cell
    /// (same row, column, or box) must hold a different digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    /// use ninefold_solution::{Solution, SolutionGenerator};
    ///
    /// let solution = SolutionGenerator::new().generate_with_seed(1).unwrap();
    /// assert!(Solution::check(solution.grid()));
    ///
    /// // Copying a digit onto a row-mate breaks the constraints
    /// let digit = *solution.grid().get(Position::new(0, 0));
    /// let broken = solution.grid().edit(Position::new(0, 1), |_, _| digit);
    /// assert!(!Solution::check(&broken));
    /// ```
    #[must_use]
    pub fn check(grid: &Grid<Digit>) -> bool {
        grid.iter()
            .all(|(pos, _)| grid.compare_related(pos, |other, this, _| other != this))
    }

    /// Checks this solution against the sudoku uniqueness constraints.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::check(&self.grid)
    }

    /// Renders the canonical JSON form: a 9×9 array of digit values.
    ///
    /// This is the round-trip counterpart of [`FromStr`]:
    /// `solution.to_json().parse()` reproduces all 81 cells.
    #[must_use]
    pub fn to_json(&self) -> String {
        let rows: Vec<Vec<u8>> = self
            .grid
            .rows()
            .map(|row| row.iter().map(|digit| digit.value()).collect())
            .collect();
        serde_json::to_string(&rows).expect("a digit grid always serializes")
    }
}

impl fmt::Display for Solution {
    /// Renders a human-readable layout with 3×3 block dividers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
                if r % 3 == 0 {
                    writeln!(f, "------+-------+------")?;
                }
            }
            for (c, digit) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                    if c % 3 == 0 {
                        write!(f, "| ")?;
                    }
                }
                write!(f, "{digit}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Solution {
    type Err = ParseSolutionError;

    /// Parses the JSON 9×9 digit array form produced by
    /// [`to_json`](Solution::to_json).
    ///
    /// Sudoku constraints are intentionally not re-checked; a structurally
    /// valid but constraint-violating grid parses successfully.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values: Vec<Vec<u64>> =
            serde_json::from_str(s).map_err(|source| ParseSolutionError::Json {
                text: s.to_owned(),
                source,
            })?;
        let mut rows = Vec::with_capacity(values.len());
        for (row, cols) in values.iter().enumerate() {
            let mut digits = Vec::with_capacity(cols.len());
            for (col, &value) in cols.iter().enumerate() {
                let digit = u8::try_from(value)
                    .ok()
                    .and_then(Digit::try_from_value)
                    .ok_or_else(|| ParseSolutionError::Digit {
                        text: s.to_owned(),
                        row,
                        col,
                        value,
                    })?;
                digits.push(digit);
            }
            rows.push(digits);
        }
        let grid = Grid::from_rows(rows).map_err(|source| ParseSolutionError::Shape {
            text: s.to_owned(),
            source,
        })?;
        Ok(Self { grid })
    }
}
