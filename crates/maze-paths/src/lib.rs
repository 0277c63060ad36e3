//! Unweighted shortest paths on grid mazes.
//!
//! The search runs breadth-first from the goal and labels every reachable
//! cell with its distance ([`search`], [`bfs_map`]). Tracing then walks
//! from the start downhill through that [`DistanceMap`] to the goal
//! ([`trace`]), choosing among equally good neighbors in a fixed
//! up, down, left, right order so results are reproducible.
//!
//! ```
//! use maze_core::{Grid, Point};
//! use maze_paths::find_path;
//!
//! let grid: Grid = "XXXXX\nXS__X\nX_X_X\nX__OX\nXXXXX".parse().unwrap();
//! let path = find_path(&grid).unwrap();
//! assert_eq!(path.move_count(), 4);
//! assert_eq!(path.goal(), Point::new(3, 3));
//! ```
//!
//! Any neighbor relation can be searched through the [`Pather`] trait;
//! [`Grid`](maze_core::Grid) implements it with 4-directional moves over
//! non-wall cells.

mod bfs;
mod distmap;
mod error;
mod trace;
mod traits;

pub use bfs::{bfs_map, search, search_between};
pub use distmap::{DistanceMap, PathNode, UNREACHABLE};
pub use error::PathError;
pub use trace::{Path, find_path, find_path_between, trace};
pub use traits::Pather;
