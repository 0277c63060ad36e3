//! **maze-core**: core types for grid mazes.
//!
//! This crate provides the foundational types used across the workspace:
//! geometry primitives, cell kinds, the maze [`Grid`] itself, and the
//! [`Frame`] diffs renderers consume.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use geom::{Direction, Point, Range};
pub use grid::{Frame, FrameCell, Grid, compute_frame};
