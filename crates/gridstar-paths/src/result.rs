use std::fmt;

use gridstar_core::Coord;

/// Which end of a query an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Destination => "destination",
        })
    }
}

/// Outcome of a path query.
///
/// Failures are ordinary values: the search never panics on bad input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "outcome", rename_all = "snake_case")
)]
pub enum PathResult {
    /// A path from source to destination, both included. `cost` is the
    /// destination's g-cost, which equals `path.len() - 1`.
    Found { path: Vec<Coord>, cost: f64 },
    /// Source and destination are the same cell.
    AlreadyAtDestination { at: Coord },
    /// An endpoint lies outside the grid.
    InvalidCoordinate { endpoint: Endpoint, at: Coord },
    /// An endpoint is a blocked cell.
    BlockedEndpoint { endpoint: Endpoint, at: Coord },
    /// Every reachable cell was expanded without touching the destination.
    NoPathExists,
    /// The configured expansion cap was hit first.
    ExpansionLimit { expanded: usize },
}

impl PathResult {
    /// Whether the destination was reached (including the trivial case).
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Found { .. } | Self::AlreadyAtDestination { .. })
    }

    /// The path, if the destination was reached.
    pub fn path(&self) -> Option<&[Coord]> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::AlreadyAtDestination { at } => Some(std::slice::from_ref(at)),
            _ => None,
        }
    }

    /// Total path cost, if the destination was reached.
    pub fn cost(&self) -> Option<f64> {
        match self {
            Self::Found { cost, .. } => Some(*cost),
            Self::AlreadyAtDestination { .. } => Some(0.0),
            _ => None,
        }
    }

    /// Consume the result, returning the path if there is one.
    pub fn into_path(self) -> Option<Vec<Coord>> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::AlreadyAtDestination { at } => Some(vec![at]),
            _ => None,
        }
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { path, cost } => write!(
                f,
                "the destination cell is found: {} cells, cost {cost}",
                path.len()
            ),
            Self::AlreadyAtDestination { at } => {
                write!(f, "we are already at the destination {at}")
            }
            Self::InvalidCoordinate { endpoint, at } => write!(f, "{endpoint} {at} is invalid"),
            Self::BlockedEndpoint { endpoint, at } => write!(f, "{endpoint} {at} is blocked"),
            Self::NoPathExists => f.write_str("failed to find the destination cell"),
            Self::ExpansionLimit { expanded } => {
                write!(f, "search stopped after {expanded} expansions")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_result_exposes_single_cell_path() {
        let r = PathResult::AlreadyAtDestination {
            at: Coord::new(2, 3),
        };
        assert!(r.is_success());
        assert_eq!(r.path(), Some(&[Coord::new(2, 3)][..]));
        assert_eq!(r.cost(), Some(0.0));
        assert_eq!(r.into_path(), Some(vec![Coord::new(2, 3)]));
    }

    #[test]
    fn failures_have_no_path() {
        let cases = [
            PathResult::NoPathExists,
            PathResult::ExpansionLimit { expanded: 4 },
            PathResult::InvalidCoordinate {
                endpoint: Endpoint::Source,
                at: Coord::new(-1, 0),
            },
            PathResult::BlockedEndpoint {
                endpoint: Endpoint::Destination,
                at: Coord::new(0, 1),
            },
        ];
        for r in cases {
            assert!(!r.is_success(), "{r}");
            assert_eq!(r.path(), None);
            assert_eq!(r.cost(), None);
        }
    }

    #[test]
    fn status_messages() {
        let r = PathResult::BlockedEndpoint {
            endpoint: Endpoint::Destination,
            at: Coord::new(0, 1),
        };
        assert_eq!(r.to_string(), "destination (0,1) is blocked");
        let r = PathResult::Found {
            path: vec![Coord::new(0, 0), Coord::new(1, 1)],
            cost: 1.0,
        };
        assert_eq!(r.to_string(), "the destination cell is found: 2 cells, cost 1");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_is_tagged() {
        let r = PathResult::InvalidCoordinate {
            endpoint: Endpoint::Source,
            at: Coord::new(9, 0),
        };
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"outcome":"invalid_coordinate","endpoint":"source","at":{"row":9,"col":0}}"#
        );
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
