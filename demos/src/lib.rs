//! Shared pieces of the `gridstar` command-line demo: the textbook fixture,
//! random obstacle grids, benchmark runs over MovingAI scenarios, and plain
//! text rendering of results.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use crossterm::style::Stylize;
use gridstar_core::{Coord, Grid, GridError, Scenario};
use gridstar_paths::{Heuristic, PathFinder, PathResult, SearchConfig};
use rand::{Rng, RngExt};

// ---------------------------------------------------------------------------
// Textbook fixture
// ---------------------------------------------------------------------------

/// Source used by the textbook demo.
pub const TEXTBOOK_SOURCE: Coord = Coord::new(8, 0);

/// Destination used by the textbook demo.
pub const TEXTBOOK_DESTINATION: Coord = Coord::new(0, 0);

/// The classic 9x10 A* example grid.
pub fn textbook_grid() -> Grid {
    const ROWS: [[u8; 10]; 9] = [
        [1, 0, 1, 1, 1, 1, 0, 1, 1, 1],
        [1, 1, 1, 0, 1, 1, 1, 0, 1, 1],
        [1, 1, 1, 0, 1, 1, 0, 1, 0, 1],
        [0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        [1, 1, 1, 0, 1, 1, 1, 0, 1, 0],
        [1, 0, 1, 1, 1, 1, 0, 1, 0, 0],
        [1, 0, 0, 0, 0, 1, 0, 0, 0, 1],
        [1, 0, 1, 1, 1, 1, 0, 1, 1, 1],
        [1, 1, 1, 0, 0, 0, 1, 0, 0, 1],
    ];
    Grid::from_fn(ROWS.len(), ROWS[0].len(), |c| {
        ROWS[c.row as usize][c.col as usize] == 1
    })
    .unwrap_or_else(|e| unreachable!("textbook grid is well-formed: {e}"))
}

// ---------------------------------------------------------------------------
// Random grids
// ---------------------------------------------------------------------------

/// Build a `rows × cols` grid where each cell is blocked with probability
/// `density_pct` percent. The cells in `keep_open` are always traversable.
pub fn random_grid(
    rows: usize,
    cols: usize,
    density_pct: u32,
    keep_open: &[Coord],
    rng: &mut impl Rng,
) -> Result<Grid, GridError> {
    Grid::from_fn(rows, cols, |c| {
        keep_open.contains(&c) || rng.random_range(0..100u32) >= density_pct
    })
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Format a path as `-> (r,c) -> (r,c) ...`.
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(|c| format!("-> {c}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render `grid` as ASCII art with `path` drawn on top: `S` source, `D`
/// destination, `*` intermediate cells. With `color`, cells carry ANSI
/// styling for a terminal.
pub fn render_with_path(grid: &Grid, path: &[Coord], color: bool) -> String {
    let mut rows: Vec<Vec<char>> = grid
        .to_string()
        .lines()
        .map(|l| l.chars().collect())
        .collect();
    let last = path.len().saturating_sub(1);
    for (i, c) in path.iter().enumerate() {
        let Some(ch) = rows
            .get_mut(c.row as usize)
            .and_then(|r| r.get_mut(c.col as usize))
        else {
            continue;
        };
        *ch = match i {
            0 => 'S',
            i if i == last => 'D',
            _ => '*',
        };
    }
    rows.into_iter()
        .map(|r| {
            r.into_iter()
                .map(|ch| if color { paint(ch) } else { ch.to_string() })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn paint(ch: char) -> String {
    match ch {
        'S' => ch.green().bold().to_string(),
        'D' => ch.red().bold().to_string(),
        '*' => ch.cyan().to_string(),
        '#' => ch.dark_grey().to_string(),
        _ => ch.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Benchmark runs
// ---------------------------------------------------------------------------

/// One scenario's outcome, as written by `gridstar bench --json`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BenchRecord {
    pub instance_num: usize,
    pub start: Coord,
    pub goal: Coord,
    pub outcome: String,
    /// Number of cells on the path, 0 when no path was found.
    pub path_length: usize,
    pub cost: Option<f64>,
    pub optimal_length: f64,
    pub time: f64,
}

/// Run every scenario against `grid`, timing each query.
pub fn run_scenarios(finder: &PathFinder, grid: &Grid, scenarios: &[Scenario]) -> Vec<BenchRecord> {
    scenarios
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let started = Instant::now();
            let result = finder.find_path(grid, s.start, s.goal);
            let time = started.elapsed().as_secs_f64();
            log::debug!("scenario {}: {result}", i + 1);
            BenchRecord {
                instance_num: i + 1,
                start: s.start,
                goal: s.goal,
                outcome: outcome_name(&result).to_string(),
                path_length: result.path().map_or(0, <[Coord]>::len),
                cost: result.cost(),
                optimal_length: s.optimal_length,
                time,
            }
        })
        .collect()
}

/// Write `records` as JSON, one object per line.
pub fn write_records(records: &[BenchRecord], mut out: impl Write) -> io::Result<()> {
    for rec in records {
        serde_json::to_writer(&mut out, rec)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Short machine-readable name of a result variant.
pub fn outcome_name(result: &PathResult) -> &'static str {
    match result {
        PathResult::Found { .. } => "found",
        PathResult::AlreadyAtDestination { .. } => "already_at_destination",
        PathResult::InvalidCoordinate { .. } => "invalid_coordinate",
        PathResult::BlockedEndpoint { .. } => "blocked_endpoint",
        PathResult::NoPathExists => "no_path_exists",
        PathResult::ExpansionLimit { .. } => "expansion_limit",
    }
}

/// Aggregate figures over a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchSummary {
    pub scenarios: usize,
    pub found: usize,
    pub total_time: f64,
}

impl BenchSummary {
    pub fn from_records(records: &[BenchRecord]) -> Self {
        Self {
            scenarios: records.len(),
            found: records.iter().filter(|r| r.cost.is_some()).count(),
            total_time: records.iter().map(|r| r.time).sum(),
        }
    }
}

impl fmt::Display for BenchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scenarios, {} paths found, {:.6}s total",
            self.scenarios, self.found, self.total_time
        )
    }
}

// ---------------------------------------------------------------------------
// Configuration files
// ---------------------------------------------------------------------------

/// Read a JSON-encoded [`SearchConfig`]. Missing fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<SearchConfig, ConfigError> {
    let text = fs::read_to_string(path.as_ref())?;
    let config = serde_json::from_str(&text)?;
    log::info!("loaded search config from {}", path.as_ref().display());
    Ok(config)
}

/// Build the search configuration for a run: the JSON file at `file` if
/// given (defaults otherwise), then any command-line overrides on top.
pub fn resolve_config(
    file: Option<&Path>,
    heuristic: Option<Heuristic>,
    max_expansions: Option<usize>,
) -> Result<SearchConfig, ConfigError> {
    let mut config = match file {
        Some(path) => load_config(path)?,
        None => SearchConfig::default(),
    };
    if let Some(h) = heuristic {
        config.heuristic = h;
    }
    if let Some(limit) = max_expansions {
        config.max_expansions = Some(limit);
    }
    Ok(config)
}

/// Parse a `ROW,COL` command-line coordinate. Whitespace around either
/// number is ignored.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let num = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate \u{201c}{v}\u{201d}: {e}"))
    };
    Ok(Coord::new(num(row)?, num(col)?))
}

/// Errors that can occur when reading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config: {e}"),
            Self::Parse(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
