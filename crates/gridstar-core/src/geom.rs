//! Grid coordinates: [`Coord`].
//!
//! Coordinates are `(row, col)` pairs with signed components so that
//! out-of-range inputs (including negative ones) can be represented and
//! rejected by whoever validates them.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A 0-indexed grid coordinate. Rows grow down, columns grow right.
///
/// Coordinates order by row first, then column. Pathfinding relies on this
/// ordering to break ties deterministically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether `other` is one of the 8 cells surrounding `self`.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }

    /// All eight neighbours (cardinal + diagonal), unfiltered.
    #[inline]
    pub fn neighbors_8(self) -> [Coord; 8] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, 1),
            self.shift(0, -1),
            self.shift(-1, 1),
            self.shift(-1, -1),
            self.shift(1, 1),
            self.shift(1, -1),
        ]
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            Coord::new(1, 0),
            Coord::new(0, 5),
            Coord::new(0, 1),
            Coord::new(1, -1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Coord::new(0, 1),
                Coord::new(0, 5),
                Coord::new(1, -1),
                Coord::new(1, 0),
            ]
        );
    }

    #[test]
    fn arithmetic() {
        let a = Coord::new(3, 4);
        let b = Coord::new(1, 2);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(a - b, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coord::new(2, 5));
    }

    #[test]
    fn adjacency() {
        let c = Coord::new(2, 2);
        for n in c.neighbors_8() {
            assert!(c.is_adjacent(n), "{n} should touch {c}");
        }
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(4, 2)));
    }

    #[test]
    fn display_and_tuple_conversion() {
        let c: Coord = (8, 0).into();
        assert_eq!(c.to_string(), "(8,0)");
        assert_eq!(<(i32, i32)>::from(c), (8, 0));
    }
}
