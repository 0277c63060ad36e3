use log::debug;
use maze_core::{Direction, Grid, Point};

use crate::bfs::{search, search_between};
use crate::distmap::DistanceMap;
use crate::error::PathError;

/// An ordered walk from a start position to a goal position, both included.
///
/// Consecutive positions are 4-adjacent and the walk is a shortest one, so
/// [`move_count`](Self::move_count) equals the graph distance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPath")
)]
pub struct Path {
    steps: Vec<Point>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPath {
    steps: Vec<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPath> for Path {
    type Error = PathError;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        if raw.steps.is_empty() {
            return Err(PathError::EmptyPath);
        }
        if let Some(w) = raw.steps.windows(2).find(|w| !w[0].is_adjacent(w[1])) {
            return Err(PathError::BrokenPath {
                from: w[0],
                to: w[1],
            });
        }
        Ok(Self { steps: raw.steps })
    }
}

impl Path {
    /// All positions, start first.
    #[inline]
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Number of positions (moves + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a path holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of moves, `len() - 1`.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn start(&self) -> Point {
        self.steps[0]
    }

    pub fn goal(&self) -> Point {
        self.steps[self.steps.len() - 1]
    }

    /// The direction taken by each move.
    pub fn directions(&self) -> Vec<Direction> {
        self.steps
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]))
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Walk `map` downhill from `start` to the map's origin.
///
/// At each position the first neighbor, in up, down, left, right order,
/// whose distance is exactly one less is taken. The walk makes exactly
/// `distance(start)` moves.
pub fn trace(map: &DistanceMap, start: Point) -> Result<Path, PathError> {
    let goal = map.origin();
    if !map.range().contains(start) {
        return Err(PathError::OutOfBounds(start));
    }
    let mut distance = map
        .at(start)
        .ok_or(PathError::UnreachableGoal { start, goal })?;

    let mut steps = Vec::with_capacity(distance as usize + 1);
    let mut cur = start;
    steps.push(cur);

    while distance > 0 {
        let want = distance - 1;
        cur = Direction::ALL
            .into_iter()
            .map(|d| cur.step(d))
            .find(|&n| map.at(n) == Some(want))
            .ok_or(PathError::NoDecreasingNeighbor { pos: cur, distance })?;
        distance = want;
        steps.push(cur);
    }

    debug_assert_eq!(cur, goal);
    Ok(Path { steps })
}

/// Search `grid` from its goal and trace the shortest path from its start.
pub fn find_path(grid: &Grid) -> Result<Path, PathError> {
    let start = grid.start()?;
    let map = search(grid)?;
    let path = trace(&map, start)?;
    debug!(
        "path {} -> {}: {} moves",
        path.start(),
        path.goal(),
        path.move_count()
    );
    Ok(path)
}

/// Like [`find_path`] but with explicit endpoints, which may coincide.
pub fn find_path_between(grid: &Grid, start: Point, goal: Point) -> Result<Path, PathError> {
    let map = search_between(grid, start, goal)?;
    trace(&map, start)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let grid: Grid = "XXXX\nXSOX\nXXXX".parse().unwrap();
        let path = find_path(&grid).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = serde_json::from_str::<Path>(r#"{"steps":[]}"#).unwrap_err();
        assert!(err.to_string().contains("no positions"), "{err}");
    }

    #[test]
    fn non_adjacent_steps_are_rejected() {
        let json = r#"{"steps":[{"x":1,"y":1},{"x":2,"y":2}]}"#;
        let err = serde_json::from_str::<Path>(json).unwrap_err();
        assert!(err.to_string().contains("non-adjacent"), "{err}");
    }
}
