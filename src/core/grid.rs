//! Letter grid representation
//!
//! A `Grid` is a fixed-size, row-major board of optional uppercase letters.
//! Grids are values: placing a letter produces a new grid, which keeps the
//! previous/candidate comparison in move validation trivial.

use std::fmt;

/// A single board cell: an uppercase ASCII letter, or empty
pub type Cell = Option<u8>;

/// A 0-indexed board coordinate
///
/// `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error type for grid construction and access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    ZeroDimension,
    RaggedRows { expected: usize, row: usize, found: usize },
    DimensionMismatch,
    OutOfBounds(Position),
    InvalidLetter(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "Grid must have at least one row and column"),
            Self::RaggedRows {
                expected,
                row,
                found,
            } => write!(f, "Row {row} has {found} cells, expected {expected}"),
            Self::DimensionMismatch => write!(f, "Grids have different dimensions"),
            Self::OutOfBounds(pos) => write!(f, "Position {pos} is outside the grid"),
            Self::InvalidLetter(c) => write!(f, "'{c}' is not a letter"),
        }
    }
}

impl std::error::Error for GridError {}

/// Normalize a typed character into a cell letter
///
/// Accepts ASCII letters of either case and returns the uppercase byte.
#[inline]
#[must_use]
pub fn normalize_letter(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8)
    } else {
        None
    }
}

/// Fixed-dimension board of optional letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Errors
    /// Returns `GridError::ZeroDimension` if either dimension is zero.
    pub fn empty(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension);
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    /// Parse a grid from text rows
    ///
    /// Letters fill cells (normalized to uppercase); `.`, `_` and space are empty.
    ///
    /// # Errors
    /// Returns `GridError` if there are no rows, rows differ in length, or a
    /// row contains any other character.
    ///
    /// # Examples
    /// ```
    /// use wordgrid::core::{Grid, Position};
    ///
    /// let grid = Grid::from_rows(&["cat", "..."]).unwrap();
    /// assert_eq!(grid.get(Position::new(0, 0)), Some(b'C'));
    /// assert_eq!(grid.get(Position::new(0, 1)), None);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut grid = Self::empty(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRows {
                    expected: width,
                    row: y,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                let cell = match c {
                    '.' | '_' | ' ' => None,
                    other => Some(normalize_letter(other).ok_or(GridError::InvalidLetter(other))?),
                };
                grid.cells[y * width + x] = cell;
            }
        }

        Ok(grid)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Check whether a position lies on the board
    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Get the cell at a position
    ///
    /// Positions outside the board read as empty.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        if self.contains(pos) {
            self.cells[pos.y * self.width + pos.x]
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_filled(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Return a copy of this grid with `letter` placed at `pos`
    ///
    /// # Errors
    /// Returns `GridError` if the position is off the board or the character
    /// is not an ASCII letter.
    pub fn with_letter(&self, pos: Position, letter: char) -> Result<Self, GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds(pos));
        }
        let byte = normalize_letter(letter).ok_or(GridError::InvalidLetter(letter))?;
        let mut next = self.clone();
        next.place(pos, byte);
        Ok(next)
    }

    /// In-place placement used by builders inside the crate
    pub(crate) fn place(&mut self, pos: Position, letter: u8) {
        if self.contains(pos) {
            self.cells[pos.y * self.width + pos.x] = Some(letter);
        }
    }

    /// Cells of row `y`, left to right
    ///
    /// # Panics
    /// Panics if `y >= height`
    #[must_use]
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Cells of column `x`, top to bottom
    pub fn column(&self, x: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).map(move |y| self.get(Position::new(x, y)))
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Number of filled cells
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Positions whose cells differ between `self` and `other`, row-major
    ///
    /// # Errors
    /// Returns `GridError::DimensionMismatch` if the grids differ in size.
    pub fn diff(&self, other: &Self) -> Result<Vec<Position>, GridError> {
        if self.width != other.width || self.height != other.height {
            return Err(GridError::DimensionMismatch);
        }
        Ok(self
            .positions()
            .filter(|&pos| self.get(pos) != other.get(pos))
            .collect())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let line: String = self
                .row(y)
                .iter()
                .map(|cell| cell.map_or('.', char::from))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
