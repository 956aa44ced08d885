//! Collections keyed by hex cell, plus region analysis over a set of
//! occupied cells.

use crate::hex::HexPoint;
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet, VecDeque};

/// A set of cell coordinates
pub type HexPointSet = HashSet<HexPoint, FnvBuildHasher>;
/// A map of cell coordinates to some `T`
pub type HexPointMap<T> = HashMap<HexPoint, T, FnvBuildHasher>;
/// An ORDERED map of cell coordinates to some `T`. This has some extra
/// memory overhead, so we should only use it when we actually need the
/// ordering (e.g. for deterministic reports).
pub type HexPointIndexMap<T> = IndexMap<HexPoint, T, FnvBuildHasher>;

/// A set of occupied cells on the canvas, with queries about the shape they
/// form. The region does not have to be contiguous.
#[derive(Clone, Debug, Default)]
pub struct Region {
    cells: HexPointSet,
}

impl Region {
    pub fn new(cells: HexPointSet) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, point: HexPoint) -> bool {
        self.cells.contains(&point)
    }

    /// Find every free cell that is fully enclosed by occupied cells, i.e.
    /// the holes in the region.
    ///
    /// Here's the algorithm:
    /// - Take the axial bounding range of the occupied cells, expanded by
    ///   one cell on every side so the border ring is known to be free
    /// - BFS inward from the border through free cells only
    /// - Any free cell in the range the search never reached is sealed off
    ///   from the outside, i.e. an interior gap
    ///
    /// The output is ordered row-by-row (by `r`, then `q`), so it's
    /// deterministic for a given region.
    pub fn interior_gaps(&self) -> Vec<HexPoint> {
        if self.cells.is_empty() {
            return Vec::new();
        }

        // Unwraps are safe, the set is non-empty
        let q_min =
            self.cells.iter().map(HexPoint::q).min().unwrap().saturating_sub(1);
        let q_max =
            self.cells.iter().map(HexPoint::q).max().unwrap().saturating_add(1);
        let r_min =
            self.cells.iter().map(HexPoint::r).min().unwrap().saturating_sub(1);
        let r_max =
            self.cells.iter().map(HexPoint::r).max().unwrap().saturating_add(1);
        let in_range = |point: HexPoint| {
            q_min <= point.q()
                && point.q() <= q_max
                && r_min <= point.r()
                && point.r() <= r_max
        };

        // Seed the search with the free cells of the border ring
        let mut reached = HexPointSet::default();
        let mut bfs_queue: VecDeque<HexPoint> = VecDeque::new();
        let border = (q_min..=q_max)
            .flat_map(|q| [HexPoint::new(q, r_min), HexPoint::new(q, r_max)])
            .chain((r_min..=r_max).flat_map(|r| {
                [HexPoint::new(q_min, r), HexPoint::new(q_max, r)]
            }));
        for point in border {
            if !self.cells.contains(&point) && reached.insert(point) {
                bfs_queue.push_back(point);
            }
        }

        // Flood outside-in through free cells
        while let Some(point) = bfs_queue.pop_front() {
            for adjacent in point.adjacents() {
                if in_range(adjacent)
                    && !self.cells.contains(&adjacent)
                    && reached.insert(adjacent)
                {
                    bfs_queue.push_back(adjacent);
                }
            }
        }

        // Whatever free cells are left were unreachable from the outside
        let mut gaps = Vec::new();
        for r in r_min..=r_max {
            for q in q_min..=q_max {
                let point = HexPoint::new(q, r);
                if !self.cells.contains(&point) && !reached.contains(&point) {
                    gaps.push(point);
                }
            }
        }
        gaps
    }
}

impl FromIterator<HexPoint> for Region {
    fn from_iter<I: IntoIterator<Item = HexPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
