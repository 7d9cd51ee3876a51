//! Square letter grid and board positions
//!
//! A grid stores `size * size` uppercase letters in row-major order. Cells are
//! addressed either by linear index or by `(row, col)` position, with
//! `row = index / size` and `col = index % size`.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// A `(row, col)` cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether two positions are king-move neighbours
    ///
    /// Adjacent means `max(|Δrow|, |Δcol|) == 1`, so a position is never
    /// adjacent to itself.
    ///
    /// # Examples
    /// ```
    /// use boggle_judge::core::Position;
    ///
    /// let centre = Position::new(1, 1);
    /// assert!(centre.is_adjacent(Position::new(0, 0)));
    /// assert!(centre.is_adjacent(Position::new(2, 1)));
    /// assert!(!centre.is_adjacent(centre));
    /// assert!(!centre.is_adjacent(Position::new(3, 1)));
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let d_row = self.row.abs_diff(other.row);
        let d_col = self.col.abs_diff(other.col);
        let chebyshev = if d_row > d_col { d_row } else { d_col };
        chebyshev == 1
    }

    /// All in-bounds neighbours of this position on a `size` x `size` grid
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Self> {
        let rows = self.row.saturating_sub(1)..=(self.row + 1).min(size.saturating_sub(1));
        rows.flat_map(move |row| {
            let cols = self.col.saturating_sub(1)..=(self.col + 1).min(size.saturating_sub(1));
            cols.map(move |col| Self::new(row, col))
        })
        .filter(move |&p| p != self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error type for malformed grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Side length is zero or the cell count is not `size * size`
    InvalidGrid { size: usize, cells: usize },
    /// A cell holds something other than an ASCII letter
    InvalidCell { index: usize, cell: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { size, cells } => match size.checked_mul(*size) {
                Some(needed) => write!(
                    f,
                    "Invalid grid: side length {size} needs {needed} cells, got {cells}"
                ),
                None => write!(f, "Invalid grid: side length {size} is too large, got {cells} cells"),
            },
            Self::InvalidCell { index, cell } => {
                write!(f, "Invalid grid: cell {index} holds {cell:?}, expected a letter")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Read access to a square board of letters
///
/// Anything that can hand out its cells in row-major order together with its
/// side length can be checked for word paths.
///
/// # Examples
/// ```
/// use boggle_judge::core::LetterBoard;
/// use boggle_judge::matcher::PathMatcher;
///
/// struct Tiles([char; 4]);
///
/// impl LetterBoard for Tiles {
///     fn cells(&self) -> &[char] {
///         &self.0
///     }
///     fn size(&self) -> usize {
///         2
///     }
/// }
///
/// let tiles = Tiles(['C', 'A', 'T', 'S']);
/// assert!(PathMatcher::default().matches(&tiles, "CATS"));
/// ```
pub trait LetterBoard {
    /// Cells in row-major order
    fn cells(&self) -> &[char];

    /// Side length
    fn size(&self) -> usize;

    /// Every position holding `letter`, in row-major order
    fn positions_of(&self, letter: char) -> Vec<Position> {
        let size = self.size();
        if size == 0 {
            return Vec::new();
        }
        self.cells()
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == letter)
            .map(|(index, _)| Position::new(index / size, index % size))
            .collect()
    }

    /// Check if `letter` appears anywhere on the board
    fn contains_letter(&self, letter: char) -> bool {
        self.cells().contains(&letter)
    }
}

/// Check the shape invariant `size >= 1 && cells.len() == size * size`
///
/// # Errors
/// Returns `GridError::InvalidGrid` when the board is not a non-empty square.
pub fn validate_board<B: LetterBoard + ?Sized>(board: &B) -> Result<(), GridError> {
    let size = board.size();
    let cells = board.cells().len();
    if size == 0 || size.checked_mul(size) != Some(cells) {
        return Err(GridError::InvalidGrid { size, cells });
    }
    Ok(())
}

/// A square grid of uppercase letters for one round
///
/// Immutable once built; a reshuffle produces a new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    size: usize,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

impl Grid {
    /// Create a grid from row-major cells and a side length
    ///
    /// Lowercase letters are uppercased.
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - `size` is zero or `cells.len() != size * size`
    /// - Any cell is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use boggle_judge::core::{Grid, GridError, LetterBoard};
    ///
    /// let grid = Grid::new("abcd".chars().collect(), 2).unwrap();
    /// assert_eq!(grid.cells(), &['A', 'B', 'C', 'D']);
    ///
    /// assert_eq!(
    ///     Grid::new(vec!['A', 'B', 'C'], 2),
    ///     Err(GridError::InvalidGrid { size: 2, cells: 3 })
    /// );
    /// ```
    pub fn new(cells: Vec<char>, size: usize) -> Result<Self, GridError> {
        let shape = SizedCells {
            cells: &cells,
            size,
        };
        validate_board(&shape)?;

        let mut normalized = Vec::with_capacity(cells.len());
        for (index, cell) in cells.into_iter().enumerate() {
            if !cell.is_ascii_alphabetic() {
                return Err(GridError::InvalidCell { index, cell });
            }
            normalized.push(cell.to_ascii_uppercase());
        }

        // Build position map for fast lookup
        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (index, &cell) in normalized.iter().enumerate() {
            letter_positions.entry(cell).or_default().push(index);
        }

        Ok(Self {
            cells: normalized,
            size,
            letter_positions,
        })
    }

    /// Convert a linear index into a position, if in bounds
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Position> {
        if index < self.cells.len() {
            Some(Position::new(index / self.size, index % self.size))
        } else {
            None
        }
    }

    /// Convert a position into a linear index, if in bounds
    #[must_use]
    pub fn index(&self, position: Position) -> Option<usize> {
        if position.row < self.size && position.col < self.size {
            Some(position.row * self.size + position.col)
        } else {
            None
        }
    }

    /// Letter at a position, if in bounds
    #[must_use]
    pub fn at(&self, position: Position) -> Option<char> {
        self.index(position).map(|index| self.cells[index])
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }
}

impl LetterBoard for Grid {
    fn cells(&self) -> &[char] {
        &self.cells
    }

    fn size(&self) -> usize {
        self.size
    }

    fn positions_of(&self, letter: char) -> Vec<Position> {
        self.letter_positions.get(&letter).map_or_else(Vec::new, |indices| {
            indices
                .iter()
                .map(|&index| Position::new(index / self.size, index % self.size))
                .collect()
        })
    }

    fn contains_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }
}

/// Parse a board string such as `"GDIW/NTEM/TAFC/ERIJ"`
///
/// Row separators (`/`, `,`) and whitespace are ignored; the side length is
/// the square root of the remaining letter count.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|&c| c != '/' && c != ',' && !c.is_whitespace())
            .collect();
        let size = cells.len().isqrt();
        if size * size != cells.len() {
            return Err(GridError::InvalidGrid {
                size,
                cells: cells.len(),
            });
        }
        Self::new(cells, size)
    }
}

/// Compact notation accepted back by `FromStr`
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for &cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Borrowed cells paired with a claimed side length, checked before a Grid is built
struct SizedCells<'a> {
    cells: &'a [char],
    size: usize,
}

impl LetterBoard for SizedCells<'_> {
    fn cells(&self) -> &[char] {
        self.cells
    }

    fn size(&self) -> usize {
        self.size
    }
}
