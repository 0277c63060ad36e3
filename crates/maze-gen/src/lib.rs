//! Random maze generation: scattered walls plus a carved start→goal corridor.

pub mod config;
pub mod mapgen;

pub use config::MazeConfig;
pub use mapgen::{AxisWalker, CorridorWalker, DirectWalker, GenError, MazeGen};
