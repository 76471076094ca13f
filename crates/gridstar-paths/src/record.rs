use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridstar_core::{Coord, Grid};

// ---------------------------------------------------------------------------
// Per-cell search bookkeeping
// ---------------------------------------------------------------------------

/// Search metadata for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CellRecord {
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) f: f64,
    /// Predecessor on the best known path. The source points at itself.
    pub(crate) parent: Option<Coord>,
}

impl CellRecord {
    pub(crate) const UNVISITED: Self = Self {
        g: f64::INFINITY,
        h: f64::INFINITY,
        f: f64::INFINITY,
        parent: None,
    };

    pub(crate) fn source(at: Coord) -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            f: 0.0,
            parent: Some(at),
        }
    }

    #[inline]
    pub(crate) fn is_unvisited(&self) -> bool {
        self.f == f64::INFINITY
    }
}

/// Open-set entry, ordered for use in `BinaryHeap`.
///
/// Pops the smallest `f` first; equal `f` values pop in ascending
/// coordinate order (row, then column).
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenEntry {
    pub(crate) f: f64,
    pub(crate) coord: Coord,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Working state of a single search: record table, closed flags and open
/// set, all indexed by the grid's row-major cell index.
///
/// Built fresh for every query and dropped with it.
pub(crate) struct SearchState {
    cols: usize,
    pub(crate) records: Vec<CellRecord>,
    pub(crate) closed: Vec<bool>,
    pub(crate) open: BinaryHeap<OpenEntry>,
    pub(crate) expanded: usize,
}

impl SearchState {
    pub(crate) fn new(grid: &Grid) -> Self {
        Self {
            cols: grid.cols(),
            records: vec![CellRecord::UNVISITED; grid.len()],
            closed: vec![false; grid.len()],
            open: BinaryHeap::new(),
            expanded: 0,
        }
    }

    /// Flat index of an in-bounds coordinate.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> usize {
        c.row as usize * self.cols + c.col as usize
    }

    #[inline]
    pub(crate) fn record(&self, c: Coord) -> &CellRecord {
        &self.records[self.idx(c)]
    }

    #[inline]
    pub(crate) fn record_mut(&mut self, c: Coord) -> &mut CellRecord {
        let i = self.idx(c);
        &mut self.records[i]
    }

    #[inline]
    pub(crate) fn is_closed(&self, c: Coord) -> bool {
        self.closed[self.idx(c)]
    }

    #[inline]
    pub(crate) fn close(&mut self, c: Coord) {
        let i = self.idx(c);
        self.closed[i] = true;
    }

    pub(crate) fn push(&mut self, f: f64, coord: Coord) {
        self.open.push(OpenEntry { f, coord });
    }

    /// Follow parent links back from `to` until reaching the cell that is
    /// its own parent, and return the cells in source-to-`to` order.
    pub(crate) fn trace_path(&self, to: Coord) -> Vec<Coord> {
        let mut path = vec![to];
        let mut cur = to;
        while let Some(parent) = self.record(cur).parent {
            if parent == cur {
                break;
            }
            path.push(parent);
            cur = parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_entries_pop_by_f_then_coord() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry {
            f: 2.0,
            coord: Coord::new(0, 0),
        });
        heap.push(OpenEntry {
            f: 1.5,
            coord: Coord::new(3, 1),
        });
        heap.push(OpenEntry {
            f: 1.5,
            coord: Coord::new(2, 9),
        });
        heap.push(OpenEntry {
            f: 1.5,
            coord: Coord::new(2, 4),
        });
        let order: Vec<Coord> = std::iter::from_fn(|| heap.pop().map(|e| e.coord)).collect();
        assert_eq!(
            order,
            vec![
                Coord::new(2, 4),
                Coord::new(2, 9),
                Coord::new(3, 1),
                Coord::new(0, 0),
            ]
        );
    }

    #[test]
    fn fresh_state_is_unvisited() {
        let grid = Grid::open(3, 4).unwrap();
        let st = SearchState::new(&grid);
        assert_eq!(st.records.len(), 12);
        assert!(st.records.iter().all(CellRecord::is_unvisited));
        assert!(st.closed.iter().all(|&c| !c));
        assert_eq!(st.idx(Coord::new(2, 3)), 11);
    }

    #[test]
    fn trace_path_stops_at_self_parent() {
        let grid = Grid::open(3, 3).unwrap();
        let mut st = SearchState::new(&grid);
        let (a, b, c) = (Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 1));
        *st.record_mut(a) = CellRecord::source(a);
        st.record_mut(b).parent = Some(a);
        st.record_mut(c).parent = Some(b);
        assert_eq!(st.trace_path(c), vec![a, b, c]);
        assert_eq!(st.trace_path(a), vec![a]);
    }
}
