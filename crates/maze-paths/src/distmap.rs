use maze_core::{Point, Range};

/// A position with its distance from the search origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in the flat distance array.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// DistanceMap
// ---------------------------------------------------------------------------

/// The result of one breadth-first search: every position reached from the
/// origin, labelled with its minimal number of 4-directional moves.
///
/// Lookups go through a flat array indexed like the grid, so
/// [`at`](Self::at) is O(1). [`nodes`](Self::nodes) lists the settled
/// entries in the order the search reached them, which is non-decreasing
/// in cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) origin: Point,
    pub(crate) dist: Vec<i32>,
    pub(crate) nodes: Vec<PathNode>,
}

impl DistanceMap {
    /// An empty map over `rng` with nothing settled yet.
    pub(crate) fn new(rng: Range, origin: Point) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            origin,
            dist: vec![UNREACHABLE; rng.len()],
            nodes: Vec::new(),
        }
    }

    /// The position distances are measured from.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The grid rectangle the search covered.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Distance of `p` from the origin, or `None` if the search never
    /// reached it (wall, disconnected, or outside the range).
    #[inline]
    pub fn at(&self, p: Point) -> Option<i32> {
        self.idx(p)
            .map(|i| self.dist[i])
            .filter(|&d| d != UNREACHABLE)
    }

    /// Whether `p` was reached.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.at(p).is_some()
    }

    /// Every settled entry, in the order the search reached them.
    #[inline]
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Number of reached positions, the origin included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing was reached. Never true for a map returned by a
    /// successful search, since the origin is always settled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The largest recorded distance.
    pub fn max_cost(&self) -> i32 {
        self.nodes.last().map_or(0, |n| n.cost)
    }

    /// Record `cost` for `p` unless it already has one. Returns whether the
    /// entry was new.
    #[inline]
    pub(crate) fn settle(&mut self, p: Point, cost: i32) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        if self.dist[i] != UNREACHABLE {
            return false;
        }
        self.dist[i] = cost;
        self.nodes.push(PathNode { pos: p, cost });
        true
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_records_first_cost_only() {
        let mut m = DistanceMap::new(Range::new(0, 0, 4, 3), Point::new(1, 1));
        assert!(m.settle(Point::new(1, 1), 0));
        assert!(m.settle(Point::new(2, 1), 1));
        assert!(!m.settle(Point::new(2, 1), 0));
        assert_eq!(m.at(Point::new(2, 1)), Some(1));
        assert_eq!(m.len(), 2);
        assert_eq!(m.max_cost(), 1);
    }

    #[test]
    fn out_of_range_is_unreached() {
        let mut m = DistanceMap::new(Range::new(0, 0, 3, 3), Point::new(1, 1));
        assert!(!m.settle(Point::new(3, 0), 0));
        assert_eq!(m.at(Point::new(3, 0)), None);
        assert_eq!(m.at(Point::new(-1, 0)), None);
        assert!(m.is_empty());
    }

    #[test]
    fn idx_is_row_major() {
        let m = DistanceMap::new(Range::new(0, 0, 5, 4), Point::ZERO);
        assert_eq!(m.idx(Point::new(3, 2)), Some(2 * 5 + 3));
        assert_eq!(m.idx(Point::new(5, 0)), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
