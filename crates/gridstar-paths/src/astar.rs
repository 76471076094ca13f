use gridstar_core::{Coord, Grid};

use crate::config::SearchConfig;
use crate::record::{CellRecord, SearchState};
use crate::result::{Endpoint, PathResult};

/// Cost of a single move, orthogonal or diagonal.
pub const STEP_COST: f64 = 1.0;

/// Find a path from `source` to `destination` with the default
/// [`SearchConfig`].
pub fn find_path(grid: &Grid, source: Coord, destination: Coord) -> PathResult {
    PathFinder::default().find_path(grid, source, destination)
}

/// A* search over an immutable [`Grid`] with 8-connected movement.
///
/// A `PathFinder` holds only its configuration. Each query builds its own
/// working state, so one finder (and one grid) can serve any number of
/// queries, including concurrent ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder {
    config: SearchConfig,
}

impl PathFinder {
    /// Create a finder with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Compute a path from `source` to `destination`.
    ///
    /// Inputs are validated in order: both endpoints in bounds
    /// ([`PathResult::InvalidCoordinate`]), both traversable
    /// ([`PathResult::BlockedEndpoint`]), then `source == destination`
    /// ([`PathResult::AlreadyAtDestination`]). Otherwise the search runs until
    /// the destination is generated as a successor or the open set empties.
    pub fn find_path(&self, grid: &Grid, source: Coord, destination: Coord) -> PathResult {
        if let Some(early) = validate(grid, source, destination) {
            log::debug!("astar {source} -> {destination}: {early}");
            return early;
        }

        log::debug!(
            "astar {source} -> {destination} on {}x{} grid ({} heuristic)",
            grid.rows(),
            grid.cols(),
            self.config.heuristic
        );
        let mut state = SearchState::new(grid);
        let result = self.search(grid, &mut state, source, destination);
        log::debug!(
            "astar {source} -> {destination}: {result} ({} expansions)",
            state.expanded
        );
        result
    }

    fn search(
        &self,
        grid: &Grid,
        state: &mut SearchState,
        source: Coord,
        destination: Coord,
    ) -> PathResult {
        *state.record_mut(source) = CellRecord::source(source);
        state.push(0.0, source);

        while let Some(entry) = state.open.pop() {
            let current = entry.coord;

            // Skip stale entries.
            if state.is_closed(current) {
                continue;
            }
            if self
                .config
                .max_expansions
                .is_some_and(|limit| state.expanded >= limit)
            {
                return PathResult::ExpansionLimit {
                    expanded: state.expanded,
                };
            }

            state.close(current);
            state.expanded += 1;
            let rec = *state.record(current);
            let current_g = rec.g;
            log::trace!("expand {current} g={} h={} f={}", rec.g, rec.h, rec.f);

            for next in current.neighbors_8() {
                if !grid.contains(next) {
                    continue;
                }

                if next == destination {
                    let cost = current_g + STEP_COST;
                    *state.record_mut(next) = CellRecord {
                        g: cost,
                        h: 0.0,
                        f: cost,
                        parent: Some(current),
                    };
                    return PathResult::Found {
                        path: state.trace_path(destination),
                        cost,
                    };
                }

                if state.is_closed(next) || !grid.is_traversable(next) {
                    continue;
                }

                let g_new = current_g + STEP_COST;
                let h_new = self.config.heuristic.estimate(next, destination);
                let f_new = g_new + h_new;

                let rec = state.record_mut(next);
                if rec.is_unvisited() || f_new < rec.f {
                    *rec = CellRecord {
                        g: g_new,
                        h: h_new,
                        f: f_new,
                        parent: Some(current),
                    };
                    // Older entries for `next` stay queued and are skipped
                    // once it is closed.
                    state.push(f_new, next);
                }
            }
        }

        PathResult::NoPathExists
    }
}

fn validate(grid: &Grid, source: Coord, destination: Coord) -> Option<PathResult> {
    let endpoints = [
        (Endpoint::Source, source),
        (Endpoint::Destination, destination),
    ];
    if let Some(&(endpoint, at)) = endpoints.iter().find(|(_, at)| !grid.contains(*at)) {
        return Some(PathResult::InvalidCoordinate { endpoint, at });
    }
    if let Some(&(endpoint, at)) = endpoints.iter().find(|(_, at)| !grid.is_traversable(*at)) {
        return Some(PathResult::BlockedEndpoint { endpoint, at });
    }
    if source == destination {
        return Some(PathResult::AlreadyAtDestination { at: source });
    }
    None
}


#[cfg(test)]
mod proptests {
    use std::collections::VecDeque;

    use proptest::prelude::*;

    use super::*;
    use crate::heuristic::Heuristic;

    fn arb_heuristic() -> impl Strategy<Value = Heuristic> {
        prop_oneof![Just(Heuristic::Euclidean), Just(Heuristic::Manhattan)]
    }

    /// Random grid plus two in-bounds endpoints.
    fn arb_query() -> impl Strategy<Value = (Grid, Coord, Coord)> {
        (1usize..12, 1usize..12).prop_flat_map(|(rows, cols)| {
            (
                prop::collection::vec(prop::bool::weighted(0.7), rows * cols),
                0..rows as i32,
                0..cols as i32,
                0..rows as i32,
                0..cols as i32,
            )
                .prop_map(move |(cells, r0, c0, r1, c1)| {
                    let grid = Grid::from_fn(rows, cols, |c| {
                        cells[c.row as usize * cols + c.col as usize]
                    })
                    .unwrap();
                    (grid, Coord::new(r0, c0), Coord::new(r1, c1))
                })
        })
    }

    /// Fewest 8-connected steps from `src` to `dst` through traversable
    /// cells, by breadth-first search.
    fn bfs_steps(grid: &Grid, src: Coord, dst: Coord) -> Option<usize> {
        let mut dist = vec![usize::MAX; grid.len()];
        let mut queue = VecDeque::new();
        dist[grid.index(src)?] = 0;
        queue.push_back(src);
        while let Some(c) = queue.pop_front() {
            let d = dist[grid.index(c)?];
            if c == dst {
                return Some(d);
            }
            for n in c.neighbors_8() {
                if !grid.is_traversable(n) {
                    continue;
                }
                let ni = grid.index(n)?;
                if dist[ni] == usize::MAX {
                    dist[ni] = d + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }

    proptest! {
        #[test]
        fn found_paths_are_valid(
            (grid, src, dst) in arb_query(),
            heuristic in arb_heuristic(),
        ) {
            let finder = PathFinder::new(SearchConfig::new().with_heuristic(heuristic));
            let result = finder.find_path(&grid, src, dst);
            if let Some(path) = result.path() {
                prop_assert_eq!(path.first(), Some(&src));
                prop_assert_eq!(path.last(), Some(&dst));
                for c in path {
                    prop_assert!(grid.is_traversable(*c), "{} is blocked", c);
                }
                for w in path.windows(2) {
                    prop_assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[0], w[1]);
                }
                prop_assert_eq!(result.cost(), Some((path.len() - 1) as f64));
            }
        }

        #[test]
        fn agrees_with_reachability(
            (grid, src, dst) in arb_query(),
            heuristic in arb_heuristic(),
        ) {
            let finder = PathFinder::new(SearchConfig::new().with_heuristic(heuristic));
            let result = finder.find_path(&grid, src, dst);
            if !grid.is_traversable(src) || !grid.is_traversable(dst) {
                prop_assert!(
                    matches!(result, PathResult::BlockedEndpoint { .. }),
                    "expected BlockedEndpoint, got {:?}",
                    result
                );
            } else {
                match bfs_steps(&grid, src, dst) {
                    Some(shortest) => {
                        let path = result.path();
                        prop_assert!(path.is_some(), "reachable but got {:?}", result);
                        prop_assert!(path.map_or(0, |p| p.len() - 1) >= shortest);
                    }
                    None => prop_assert_eq!(result, PathResult::NoPathExists),
                }
            }
        }

        #[test]
        fn deterministic((grid, src, dst) in arb_query()) {
            let a = find_path(&grid, src, dst);
            let b = find_path(&grid.clone(), src, dst);
            prop_assert_eq!(a, b);
        }
    }
}
