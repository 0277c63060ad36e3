//! Shared pieces of the `pathfinding` binary: loading mazes and animating
//! a traced path on any [`Renderer`].
//!
//! The [`Animator`] is the only place a maze is mutated after generation.
//! It owns a private copy of the grid and moves the start marker along the
//! path one cell per step, handing back the changed cells as a [`Frame`].

use std::path::Path as FsPath;
use std::thread;
use std::time::Duration;

use log::{debug, info};
use maze_core::{Cell, Frame, Grid, GridError, Point, compute_frame};
use maze_crossterm::Renderer;
use maze_paths::{DistanceMap, Path};

/// Read a maze from a text file of cell glyphs.
pub fn load_maze(file: &FsPath) -> Result<Grid, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read maze file {}: {e}", file.display()))?;
    let grid: Grid = text.parse()?;
    info!(
        "loaded {}x{} maze from {}",
        grid.height(),
        grid.width(),
        file.display()
    );
    Ok(grid)
}

/// The search result for one maze.
#[derive(Debug, Clone)]
pub struct Solution {
    pub map: DistanceMap,
    pub path: Path,
}

/// Validate `grid`, search it from the goal and trace the path from the
/// start. Any failure here ends the program with a non-zero exit code.
pub fn solve(grid: &Grid) -> Result<Solution, Box<dyn std::error::Error>> {
    grid.validate()?;
    let map = maze_paths::search(grid)?;
    let path = maze_paths::trace(&map, grid.start()?)?;
    info!(
        "shortest path {} -> {}: {} moves, {} cells explored",
        path.start(),
        path.goal(),
        path.move_count(),
        map.len()
    );
    Ok(Solution { map, path })
}

/// Solve `grid` and play the path on `renderer`. Returns the solution and
/// the number of moves made.
pub fn run<R: Renderer>(
    renderer: &mut R,
    grid: &Grid,
    delay: Duration,
) -> Result<(Solution, usize), Box<dyn std::error::Error>> {
    let solution = solve(grid)?;
    let moves = animate(renderer, grid, &solution.path, delay)?;
    Ok((solution, moves))
}

// ---------------------------------------------------------------------------
// Animator
// ---------------------------------------------------------------------------

/// Walks the start marker along a path on a private copy of the grid.
pub struct Animator {
    grid: Grid,
    path: Path,
    step: usize,
}

impl Animator {
    /// Start animating `path` over a copy of `grid`.
    pub fn new(grid: &Grid, path: Path) -> Self {
        Self {
            grid: grid.clone(),
            path,
            step: 0,
        }
    }

    /// The grid as it currently looks.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current position of the start marker.
    pub fn marker(&self) -> Point {
        self.path.steps()[self.step]
    }

    /// Number of moves made so far.
    pub fn moves_used(&self) -> usize {
        self.step
    }

    /// Whether the marker has reached the end of the path.
    pub fn is_done(&self) -> bool {
        self.step >= self.path.move_count()
    }

    /// Advance the marker by one cell. Returns the changed cells, or `None`
    /// once the path is exhausted.
    pub fn step(&mut self) -> Result<Option<Frame>, GridError> {
        if self.is_done() {
            return Ok(None);
        }
        let prev = self.grid.clone();
        let from = self.marker();
        let to = self.path.steps()[self.step + 1];
        self.grid.set(from, Cell::Open)?;
        self.grid.set(to, Cell::Start)?;
        self.step += 1;
        debug!("marker {from} -> {to}");
        Ok(Some(compute_frame(&prev, &self.grid)))
    }
}

/// Draw `grid`, then play `path` on `renderer` with `delay` between frames.
/// Returns the number of moves made.
///
/// The renderer is closed even when drawing fails.
pub fn animate<R: Renderer>(
    renderer: &mut R,
    grid: &Grid,
    path: &Path,
    delay: Duration,
) -> Result<usize, Box<dyn std::error::Error>> {
    renderer.init()?;
    let result = play(renderer, grid, path, delay);
    renderer.close();
    result
}

fn play<R: Renderer>(
    renderer: &mut R,
    grid: &Grid,
    path: &Path,
    delay: Duration,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut animator = Animator::new(grid, path.clone());
    renderer.draw(animator.grid())?;
    while let Some(frame) = animator.step()? {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        renderer.flush(frame)?;
        renderer.status(&format!("Moves used: {}", animator.moves_used()))?;
    }
    Ok(animator.moves_used())
}
