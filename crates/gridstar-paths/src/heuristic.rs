use std::fmt;
use std::str::FromStr;

use gridstar_core::Coord;

/// Straight-line (L2) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> f64 {
    f64::from((a.row - b.row).abs() + (a.col - b.col).abs())
}

/// Estimate of the remaining cost from a cell to the destination.
///
/// Every step costs `1.0` whatever its direction, so neither heuristic is
/// admissible for diagonal moves: the search may return a path longer than
/// the shortest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Heuristic {
    #[default]
    Euclidean,
    Manhattan,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Coord, to: Coord) -> f64 {
        match self {
            Self::Euclidean => euclidean(from, to),
            Self::Manhattan => manhattan(from, to),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" | "l2" => Ok(Self::Euclidean),
            "manhattan" | "l1" => Ok(Self::Manhattan),
            _ => Err(format!(
                "unknown heuristic \u{201c}{s}\u{201d} (expected euclidean or manhattan)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_distance() {
        assert_eq!(euclidean(Coord::new(0, 0), Coord::new(3, 4)), 5.0);
        assert_eq!(euclidean(Coord::new(2, 2), Coord::new(2, 2)), 0.0);
        let d = euclidean(Coord::new(8, 0), Coord::new(0, 9));
        assert!((d - 145f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Coord::new(0, 0), Coord::new(3, 4)), 7.0);
        assert_eq!(manhattan(Coord::new(5, 1), Coord::new(2, 3)), 5.0);
    }

    #[test]
    fn estimate_dispatches() {
        let (a, b) = (Coord::new(1, 1), Coord::new(4, 5));
        assert_eq!(Heuristic::default(), Heuristic::Euclidean);
        assert_eq!(Heuristic::Euclidean.estimate(a, b), 5.0);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7.0);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Euclidean".parse(), Ok(Heuristic::Euclidean));
        assert_eq!("l1".parse(), Ok(Heuristic::Manhattan));
        assert!("octile".parse::<Heuristic>().is_err());
        for h in [Heuristic::Euclidean, Heuristic::Manhattan] {
            assert_eq!(h.to_string().parse(), Ok(h));
        }
    }
}
