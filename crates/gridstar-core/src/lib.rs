//! **gridstar-core**: grid types shared by the *gridstar* pathfinding crates.
//!
//! This crate provides the foundational types: [`Coord`] (row, column)
//! coordinates, the immutable traversability [`Grid`], and readers for the
//! MovingAI `.map` / `.scen` benchmark formats.

pub mod geom;
pub mod grid;
pub mod map;
pub mod scen;

pub use geom::Coord;
pub use grid::{Grid, GridError};
pub use map::{MapError, load_map, parse_map};
pub use scen::{Scenario, ScenarioError, load_scenarios, parse_scenarios};
