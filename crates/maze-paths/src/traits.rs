use maze_core::{Direction, Grid, Point};

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    ///
    /// Neighbors must be 4-adjacent to `p`. Their order is the order in
    /// which a search expands them.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A grid yields its passable cardinal neighbors in up, down, left, right
/// order. Walls and positions outside the grid are never produced.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in Direction::ALL {
            let n = p.step(d);
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_neighbors_skip_walls() {
        let g: Grid = "XXXX\nXS_X\nX_XX\nXXXX".parse().unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 2), Point::new(2, 1)]);

        buf.clear();
        g.neighbors(Point::new(2, 2), &mut buf);
        assert_eq!(buf, vec![Point::new(2, 1), Point::new(1, 2)]);
    }

    #[test]
    fn grid_neighbors_at_edge_stay_in_bounds() {
        let g: Grid = "___\n___\n___".parse().unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1), Point::new(1, 0)]);
    }
}
