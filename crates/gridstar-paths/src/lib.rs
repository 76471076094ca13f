//! A* pathfinding over immutable traversability grids.
//!
//! The search moves between 8-connected neighbours at a uniform cost of
//! `1.0` per step and is guided by a straight-line heuristic:
//!
//! - [`find_path`] runs a query with the default [`SearchConfig`]
//! - [`PathFinder`] runs queries with a custom configuration
//!   ([`Heuristic`], expansion cap)
//!
//! Every query reports a [`PathResult`]. Invalid or blocked endpoints and
//! unreachable destinations are ordinary outcomes, not errors.
//!
//! Searches are deterministic. The open set is ordered by f-cost, then by
//! coordinate (row, then column); successors are generated in the order
//! N, S, E, W, NE, NW, SE, SW.

mod astar;
mod config;
mod heuristic;
mod record;
mod result;

pub use astar::{PathFinder, STEP_COST, find_path};
pub use config::SearchConfig;
pub use heuristic::{Heuristic, euclidean, manhattan};
pub use result::{Endpoint, PathResult};
