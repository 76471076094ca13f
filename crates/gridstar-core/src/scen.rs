//! Reader for MovingAI `.scen` scenario files.
//!
//! Each record names a map and a start/goal pair:
//!
//! ```text
//! version 1
//! 0	maps/arena.map	49	49	1	11	1	12	1
//! ```
//!
//! Columns are `bucket map width height start_x start_y goal_x goal_y
//! optimal_length`, where `x` is the column and `y` the row.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::geom::Coord;

/// A single start/goal query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub bucket: u32,
    pub map: String,
    pub map_width: usize,
    pub map_height: usize,
    pub start: Coord,
    pub goal: Coord,
    /// Optimal octile path length published with the benchmark.
    pub optimal_length: f64,
}

/// Read and parse a `.scen` file from disk.
pub fn load_scenarios(path: impl AsRef<Path>) -> Result<Vec<Scenario>, ScenarioError> {
    let text = fs::read_to_string(path.as_ref())?;
    let scenarios = parse_scenarios(&text)?;
    log::debug!(
        "loaded {} scenarios from {}",
        scenarios.len(),
        path.as_ref().display()
    );
    Ok(scenarios)
}

/// Parse the text of a `.scen` file. The `version` header is optional.
pub fn parse_scenarios(text: &str) -> Result<Vec<Scenario>, ScenarioError> {
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() || (i == 0 && line.starts_with("version")) {
            continue;
        }
        out.push(parse_record(line).ok_or_else(|| ScenarioError::BadRecord {
            line: line_no,
            text: line.to_string(),
        })?);
    }
    Ok(out)
}

fn parse_record(line: &str) -> Option<Scenario> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 9 {
        return None;
    }
    let int = |i: usize| parts[i].parse::<i32>().ok();
    Some(Scenario {
        bucket: parts[0].parse().ok()?,
        map: parts[1].to_string(),
        map_width: parts[2].parse().ok()?,
        map_height: parts[3].parse().ok()?,
        start: Coord::new(int(5)?, int(4)?),
        goal: Coord::new(int(7)?, int(6)?),
        optimal_length: parts[8].parse().ok()?,
    })
}

// ---------------------------------------------------------------------------
// ScenarioError
// ---------------------------------------------------------------------------

/// Errors that can occur when reading a `.scen` file.
#[derive(Debug)]
pub enum ScenarioError {
    /// The file could not be read.
    Io(std::io::Error),
    /// A record does not have the nine expected fields (1-based line number).
    BadRecord { line: usize, text: String },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "scenario: {e}"),
            Self::BadRecord { line, text } => {
                write!(f, "scenario: malformed record on line {line}: {text:?}")
            }
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::BadRecord { .. } => None,
        }
    }
}

impl From<std::io::Error> for ScenarioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
