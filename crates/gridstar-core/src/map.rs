//! Reader for MovingAI `.map` benchmark files.
//!
//! ```text
//! type octile
//! height 3
//! width 4
//! map
//! ....
//! .@@.
//! ....
//! ```
//!
//! `.` and `G` are traversable; every other terrain character is blocked.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::grid::{Grid, GridError};

/// Terrain characters that count as traversable.
pub const PASSABLE_TERRAIN: &str = ".G";

/// Read and parse a `.map` file from disk.
pub fn load_map(path: impl AsRef<Path>) -> Result<Grid, MapError> {
    let text = fs::read_to_string(path.as_ref())?;
    let grid = parse_map(&text)?;
    log::debug!(
        "loaded map {} ({}x{}, {} traversable)",
        path.as_ref().display(),
        grid.rows(),
        grid.cols(),
        grid.count_traversable()
    );
    Ok(grid)
}

/// Parse the text of a `.map` file.
pub fn parse_map(text: &str) -> Result<Grid, MapError> {
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

    let mut height = None;
    let mut width = None;
    let mut line_no = 0;
    loop {
        let Some(line) = lines.next() else {
            return Err(MapError::MissingSection("map"));
        };
        line_no += 1;
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("type"), _) => {}
            (Some("height"), Some(v)) => height = Some(parse_dim(v, line_no, line)?),
            (Some("width"), Some(v)) => width = Some(parse_dim(v, line_no, line)?),
            (Some("map"), None) => break,
            (None, _) => {}
            _ => {
                return Err(MapError::BadHeader {
                    line: line_no,
                    text: line.to_string(),
                });
            }
        }
    }
    let height = height.ok_or(MapError::MissingSection("height"))?;
    let width = width.ok_or(MapError::MissingSection("width"))?;

    let rows: Vec<Vec<bool>> = lines
        .filter(|l| !l.is_empty())
        .map(|l| l.chars().map(|ch| PASSABLE_TERRAIN.contains(ch)).collect())
        .collect();

    if rows.len() != height {
        return Err(MapError::SizeMismatch {
            height,
            width,
            rows: rows.len(),
            cols: rows.first().map_or(0, Vec::len),
        });
    }
    if let Some(row) = rows.iter().position(|r| r.len() != width) {
        return Err(MapError::SizeMismatch {
            height,
            width,
            rows: height,
            cols: rows[row].len(),
        });
    }

    Ok(Grid::from_rows(&rows)?)
}

fn parse_dim(v: &str, line: usize, text: &str) -> Result<usize, MapError> {
    v.parse().map_err(|_| MapError::BadHeader {
        line,
        text: text.to_string(),
    })
}

// ---------------------------------------------------------------------------
// MapError
// ---------------------------------------------------------------------------

/// Errors that can occur when reading a `.map` file.
#[derive(Debug)]
pub enum MapError {
    /// The file could not be read.
    Io(std::io::Error),
    /// A header line is malformed (1-based line number).
    BadHeader { line: usize, text: String },
    /// A required header entry never appeared.
    MissingSection(&'static str),
    /// The terrain block is `rows × cols` instead of the declared
    /// `height × width`.
    SizeMismatch {
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },
    /// The terrain could not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "map: {e}"),
            Self::BadHeader { line, text } => {
                write!(f, "map: malformed header on line {line}: {text:?}")
            }
            Self::MissingSection(name) => write!(f, "map: missing \u{201c}{name}\u{201d} header"),
            Self::SizeMismatch {
                height,
                width,
                rows,
                cols,
            } => write!(
                f,
                "map: declared {height}x{width} but terrain is {rows}x{cols}"
            ),
            Self::Grid(e) => write!(f, "map: {e}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for MapError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
