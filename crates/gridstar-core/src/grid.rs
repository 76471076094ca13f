//! The [`Grid`] type: an immutable 2D map of traversability flags.
//!
//! Unlike a drawing surface, a `Grid` never changes after construction, so a
//! single instance can be shared by any number of concurrent searches.

use std::fmt;

use crate::geom::Coord;

/// Characters [`Grid::parse`] treats as blocked.
pub const BLOCKED_RUNES: &str = "#@TOW";

/// Character [`Grid::parse`] treats as traversable.
pub const OPEN_RUNE: char = '.';

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `rows × cols` grid of traversable (`true`) and blocked (`false`)
/// cells, stored row-major.
///
/// Every constructor guarantees at least one row and one column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid where every cell is traversable.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::from_fn(rows, cols, |_| true)
    }

    /// Create a grid by evaluating `f` for every coordinate in row-major
    /// order.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(Coord) -> bool,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty { rows, cols });
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(Coord::new(r as i32, c as i32)));
            }
        }
        Ok(Self { cells, rows, cols })
    }

    /// Create a grid from rows of flags. All rows must have the same width.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.is_empty() || width == 0 {
            return Err(GridError::Empty {
                rows: rows.len(),
                cols: width,
            });
        }
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (i, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::Ragged {
                    row: i,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols: width,
        })
    }

    /// Create a grid from rows of integer flags, `1` meaning traversable and
    /// `0` blocked (the textbook encoding). Any non-zero value counts as
    /// traversable.
    pub fn from_flags<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let rows: Vec<Vec<bool>> = rows
            .iter()
            .map(|r| r.as_ref().iter().map(|&v| v != 0).collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Parse an ASCII-art grid.
    ///
    /// [`OPEN_RUNE`] is traversable, any of [`BLOCKED_RUNES`] is blocked.
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines, so every line must have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        for (y, line) in s.trim().lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                if ch == OPEN_RUNE {
                    row.push(true);
                } else if BLOCKED_RUNES.contains(ch) {
                    row.push(false);
                } else {
                    return Err(GridError::InvalidRune {
                        ch,
                        at: Coord::new(y as i32, x as i32),
                    });
                }
            }
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols + c.col as usize)
    }

    /// Coordinate of a flat row-major index.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Whether `c` is inside the grid and not blocked.
    #[inline]
    pub fn is_traversable(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|i| self.cells[i])
    }

    /// Number of traversable cells.
    pub fn count_traversable(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }

    /// Row-major iterator over `(Coord, traversable)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &open)| (self.coord(i), open))
    }
}

impl fmt::Display for Grid {
    /// Render as ASCII art accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &open in row {
                f.write_str(if open { "." } else { "#" })?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.to_string();
        let lines: Vec<&str> = text.lines().collect();
        serde::Serialize::serialize(&lines, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lines = <Vec<String> as serde::Deserialize>::deserialize(deserializer)?;
        Grid::parse(&lines.join("\n")).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zero rows or zero columns.
    Empty { rows: usize, cols: usize },
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither traversable nor blocked.
    InvalidRune { ch: char, at: Coord },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { rows, cols } => {
                write!(f, "grid must be at least 1x1, got {rows}x{cols}")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, at } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {at}")
            }
        }
    }
}

impl std::error::Error for GridError {}
