use log::debug;
use maze_core::{Grid, Point, Range};

use crate::distmap::DistanceMap;
use crate::error::PathError;
use crate::traits::Pather;

/// Compute a breadth-first distance map from `origin` over `rng`.
///
/// The search expands one level at a time: every position of the current
/// frontier generates its neighbors, and a neighbor is settled the first
/// time it is produced, at `level + 1`. Positions outside `rng` are
/// skipped. Each position enters a frontier at most once, so the work is
/// bounded by `rng.len()`.
pub fn bfs_map<P: Pather>(pather: &P, rng: Range, origin: Point) -> Result<DistanceMap, PathError> {
    let mut map = DistanceMap::new(rng, origin);
    if !map.settle(origin, 0) {
        return Err(PathError::OutOfBounds(origin));
    }

    let mut frontier = vec![origin];
    let mut next = Vec::new();
    let mut nbuf = Vec::with_capacity(4);
    let mut level = 0;

    while !frontier.is_empty() {
        level += 1;
        for &cp in &frontier {
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);
            for &np in &nbuf {
                if map.settle(np, level) {
                    next.push(np);
                }
            }
        }
        std::mem::swap(&mut frontier, &mut next);
        next.clear();
    }

    debug!(
        "bfs from {origin}: {} cells settled, max distance {}",
        map.len(),
        map.max_cost()
    );
    Ok(map)
}

/// Search `grid` from `goal` and check that `start` was reached.
///
/// Both positions must be inside the grid and passable. `start` may equal
/// `goal`.
pub fn search_between(grid: &Grid, start: Point, goal: Point) -> Result<DistanceMap, PathError> {
    for p in [start, goal] {
        if !grid.cell_at(p)?.is_passable() {
            return Err(PathError::UnreachableGoal { start, goal });
        }
    }
    let map = bfs_map(grid, grid.bounds(), goal)?;
    if !map.contains(start) {
        return Err(PathError::UnreachableGoal { start, goal });
    }
    Ok(map)
}

/// Search `grid` outward from its goal marker toward its start marker.
pub fn search(grid: &Grid) -> Result<DistanceMap, PathError> {
    let start = grid.start()?;
    let goal = grid.goal()?;
    search_between(grid, start, goal)
}
