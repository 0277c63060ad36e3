//! Random maze generation with a guaranteed corridor.
//!
//! A maze is built in three passes:
//! - **Scatter**: border cells become walls, each interior cell becomes a
//!   wall with probability [`MazeConfig::wall_pct`].
//! - **Tokens**: start and goal land on two distinct random interior cells.
//! - **Carve**: a [`CorridorWalker`] walks from start to goal, opening every
//!   wall it steps on, so at least one path always connects the two.

use std::fmt;

use log::{debug, warn};
use maze_core::{Cell, Grid, GridError, Point, Range};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::MazeConfig;

/// Chooses the next corridor cell while carving from start to goal.
pub trait CorridorWalker {
    /// Given the trace position `pos`, return the next position using `rng`.
    ///
    /// The result must be `pos` itself or 4-adjacent to it, and must lie
    /// inside `interior`.
    fn step(&self, pos: Point, goal: Point, interior: Range, rng: &mut impl Rng) -> Point;
}

/// Picks a random axis each step and moves one cell toward the goal on it.
///
/// When the trace is already aligned with the goal on the chosen axis and
/// `wander` is set, it side-steps one cell either way instead, which bends
/// the corridor.
#[derive(Debug, Clone, Copy)]
pub struct AxisWalker {
    pub wander: bool,
}

impl CorridorWalker for AxisWalker {
    fn step(&self, pos: Point, goal: Point, interior: Range, rng: &mut impl Rng) -> Point {
        let horizontal = rng.random_bool(0.5);
        let (cur, target) = if horizontal {
            (pos.x, goal.x)
        } else {
            (pos.y, goal.y)
        };
        let delta = match cur.cmp(&target) {
            std::cmp::Ordering::Less => 1,
            std::cmp::Ordering::Greater => -1,
            std::cmp::Ordering::Equal if self.wander => {
                if rng.random_bool(0.5) {
                    1
                } else {
                    -1
                }
            }
            std::cmp::Ordering::Equal => 0,
        };
        let next = if horizontal {
            pos.shift(delta, 0)
        } else {
            pos.shift(0, delta)
        };
        interior.clamp(next)
    }
}

/// Moves along x until aligned with the goal, then along y.
///
/// Deterministic; reaches the goal in exactly the Manhattan distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectWalker;

impl CorridorWalker for DirectWalker {
    fn step(&self, pos: Point, goal: Point, _interior: Range, _rng: &mut impl Rng) -> Point {
        if pos.x != goal.x {
            pos.shift((goal.x - pos.x).signum(), 0)
        } else {
            pos.shift(0, (goal.y - pos.y).signum())
        }
    }
}

/// Errors that can occur when generating a maze.
#[derive(Debug, Clone, PartialEq)]
pub enum GenError {
    /// The requested dimensions are not a valid grid.
    Grid(GridError),
    /// The interior has fewer than two cells, so start and goal cannot differ.
    InteriorTooSmall { rows: usize, cols: usize },
    /// The wall probability is not within 0.0–1.0.
    InvalidWallPct(f64),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "mapgen: {e}"),
            Self::InteriorTooSmall { rows, cols } => write!(
                f,
                "mapgen: a {rows}x{cols} grid has no room for distinct start and goal"
            ),
            Self::InvalidWallPct(p) => {
                write!(f, "mapgen: wall probability {p} is outside 0.0-1.0")
            }
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GenError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Maze generator producing [`Grid`] values.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: MazeConfig,
}

impl MazeGen<StdRng> {
    /// A generator whose output depends only on `config` and `seed`.
    pub fn seeded(config: MazeConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator.
    pub fn new(config: MazeConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Generate a maze, carving the corridor with an [`AxisWalker`].
    pub fn generate(&mut self) -> Result<Grid, GenError> {
        let walker = AxisWalker {
            wander: self.config.wander,
        };
        self.generate_with(&walker)
    }

    /// Generate a maze, carving the corridor with `walker`.
    pub fn generate_with(&mut self, walker: &impl CorridorWalker) -> Result<Grid, GenError> {
        let MazeConfig {
            rows,
            cols,
            wall_pct,
            ..
        } = self.config;
        if !(0.0..=1.0).contains(&wall_pct) {
            return Err(GenError::InvalidWallPct(wall_pct));
        }
        let mut grid = Grid::new(rows, cols)?;
        let interior = grid.bounds().interior();
        if interior.len() < 2 {
            return Err(GenError::InteriorTooSmall { rows, cols });
        }

        self.scatter_walls(&mut grid, interior, wall_pct)?;

        let start_idx = self.rng.random_range(0..interior.len());
        let mut goal_idx = self.rng.random_range(0..interior.len() - 1);
        if goal_idx >= start_idx {
            goal_idx += 1;
        }
        let start = interior_point(interior, start_idx);
        let goal = interior_point(interior, goal_idx);
        grid.set(start, Cell::Start)?;
        grid.set(goal, Cell::Goal)?;
        debug!("mapgen: {rows}x{cols}, start {start}, goal {goal}");

        let steps = self.carve(&mut grid, interior, start, goal, walker)?;
        debug!(
            "mapgen: corridor carved in {steps} steps, {} open cells",
            grid.count(Cell::Open)
        );
        Ok(grid)
    }

    /// Border cells stay walls; interior cells are walls with probability
    /// `wall_pct`, open otherwise.
    fn scatter_walls(
        &mut self,
        grid: &mut Grid,
        interior: Range,
        wall_pct: f64,
    ) -> Result<(), GenError> {
        grid.fill(Cell::Wall);
        for p in interior.iter() {
            if !self.rng.random_bool(wall_pct) {
                grid.set(p, Cell::Open)?;
            }
        }
        Ok(())
    }

    /// Walk from `start` to `goal`, opening walls on the way. Returns the
    /// number of steps taken.
    fn carve(
        &mut self,
        grid: &mut Grid,
        interior: Range,
        start: Point,
        goal: Point,
        walker: &impl CorridorWalker,
    ) -> Result<usize, GenError> {
        let limit = self.config.carve_step_limit();
        let mut pos = start;
        let mut steps = 0usize;

        while pos != goal && steps < limit {
            pos = walker.step(pos, goal, interior, &mut self.rng);
            open_wall(grid, pos)?;
            steps += 1;
        }

        if pos != goal {
            warn!("mapgen: corridor walk hit {limit} steps at {pos}, finishing straight");
            while pos != goal {
                pos = DirectWalker.step(pos, goal, interior, &mut self.rng);
                open_wall(grid, pos)?;
                steps += 1;
            }
        }
        Ok(steps)
    }
}

/// Turn a wall into an open cell; start and goal markers are kept.
fn open_wall(grid: &mut Grid, p: Point) -> Result<(), GridError> {
    if grid.cell_at(p)? == Cell::Wall {
        grid.set(p, Cell::Open)?;
    }
    Ok(())
}

/// The `i`-th interior cell in row-major order.
fn interior_point(interior: Range, i: usize) -> Point {
    let w = interior.width() as usize;
    Point::new(
        interior.min.x + (i % w) as i32,
        interior.min.y + (i / w) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_paths::find_path;

    #[test]
    fn generated_mazes_validate_and_connect() {
        for seed in 0..200 {
            let rows = 3 + (seed as usize % 9);
            let cols = 4 + (seed as usize % 7);
            let mut mg = MazeGen::seeded(MazeConfig::with_size(rows, cols), seed);
            let grid = mg.generate().unwrap();
            assert_eq!(grid.dimensions(), (rows, cols));
            grid.validate().unwrap();
            let path = find_path(&grid).unwrap();
            assert!(path.move_count() >= 1, "seed {seed}");
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGen::seeded(MazeConfig::default(), 42).generate().unwrap();
        let b = MazeGen::seeded(MazeConfig::default(), 42).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn thread_rng_generator_works() {
        let mut mg = MazeGen::new(MazeConfig::with_size(12, 20), rand::rng());
        let grid = mg.generate().unwrap();
        grid.validate().unwrap();
        assert!(find_path(&grid).is_ok());
    }

    #[test]
    fn three_by_three_is_too_small() {
        let err = MazeGen::seeded(MazeConfig::with_size(3, 3), 1)
            .generate()
            .unwrap_err();
        assert_eq!(err, GenError::InteriorTooSmall { rows: 3, cols: 3 });
    }

    #[test]
    fn undersized_grid_is_grid_error() {
        let err = MazeGen::seeded(MazeConfig::with_size(2, 8), 1)
            .generate()
            .unwrap_err();
        assert!(matches!(err, GenError::Grid(GridError::TooSmall { .. })));
    }

    #[test]
    fn two_cell_interior_holds_both_tokens() {
        for seed in 0..20 {
            let grid = MazeGen::seeded(MazeConfig::with_size(3, 4), seed)
                .generate()
                .unwrap();
            grid.validate().unwrap();
            assert_eq!(find_path(&grid).unwrap().move_count(), 1);
        }
    }

    #[test]
    fn bad_wall_pct_is_rejected() {
        let cfg = MazeConfig::default().with_wall_pct(1.5);
        let err = MazeGen::seeded(cfg, 0).generate().unwrap_err();
        assert_eq!(err, GenError::InvalidWallPct(1.5));
    }

    #[test]
    fn no_walls_leaves_interior_open() {
        let cfg = MazeConfig::with_size(6, 7).with_wall_pct(0.0);
        let grid = MazeGen::seeded(cfg, 9).generate().unwrap();
        assert_eq!(grid.count(Cell::Open), 4 * 5 - 2);
    }

    #[test]
    fn direct_walker_carves_an_l() {
        let cfg = MazeConfig::with_size(9, 11).with_wall_pct(1.0);
        for seed in 0..30 {
            let grid = MazeGen::seeded(cfg.clone(), seed)
                .generate_with(&DirectWalker)
                .unwrap();
            let (s, g) = (grid.start().unwrap(), grid.goal().unwrap());
            let manhattan = ((s.x - g.x).abs() + (s.y - g.y).abs()) as usize;
            assert_eq!(grid.count(Cell::Open), manhattan - 1);
            assert_eq!(find_path(&grid).unwrap().move_count(), manhattan);
        }
    }

    #[test]
    fn axis_walker_stays_inside_and_adjacent() {
        let interior = Range::new(1, 1, 6, 6);
        let walker = AxisWalker { wander: true };
        let mut rng = StdRng::seed_from_u64(7);
        let goal = Point::new(1, 1);
        let mut pos = Point::new(1, 5);
        for _ in 0..500 {
            let next = walker.step(pos, goal, interior, &mut rng);
            assert!(interior.contains(next));
            assert!(next == pos || next.is_adjacent(pos));
            pos = next;
        }
    }

    #[test]
    fn side_steps_are_clamped_to_interior() {
        // One column wide: every horizontal side-step leaves the interior.
        let interior = Range::new(3, 1, 4, 6);
        let walker = AxisWalker { wander: true };
        let mut rng = StdRng::seed_from_u64(11);
        let goal = Point::new(3, 5);
        let mut pos = Point::new(3, 1);
        let mut steps = 0;
        while pos != goal {
            let next = walker.step(pos, goal, interior, &mut rng);
            assert_eq!(next.x, 3);
            assert!(next.y >= pos.y, "walker moved away from the goal");
            pos = next;
            steps += 1;
            assert!(steps < 200, "walker never reached the goal");
        }
    }

    #[test]
    fn full_walls_still_connect() {
        let cfg = MazeConfig::with_size(15, 15).with_wall_pct(1.0);
        for seed in 0..50 {
            let grid = MazeGen::seeded(cfg.clone(), seed).generate().unwrap();
            assert!(find_path(&grid).is_ok(), "seed {seed}");
        }
    }
}
