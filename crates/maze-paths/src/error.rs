use std::fmt;

use maze_core::{GridError, Point};

/// Errors raised by the shortest-path search and path tracing.
///
/// Every variant is a precondition violation: the grid or distance map
/// handed in was malformed. None of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A start or origin position lies outside the searched range.
    OutOfBounds(Point),
    /// The search exhausted every reachable cell without reaching `start`.
    UnreachableGoal { start: Point, goal: Point },
    /// Tracing got stuck at `pos`: no neighbor has distance `distance - 1`.
    NoDecreasingNeighbor { pos: Point, distance: i32 },
    /// A path with no positions.
    EmptyPath,
    /// Two consecutive path positions are not 4-adjacent.
    BrokenPath { from: Point, to: Point },
    /// The grid itself could not be read.
    Grid(GridError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the search range"),
            Self::UnreachableGoal { start, goal } => {
                write!(f, "goal {goal} is unreachable from start {start}")
            }
            Self::NoDecreasingNeighbor { pos, distance } => write!(
                f,
                "no neighbor of {pos} has distance {} (distance map is inconsistent)",
                distance - 1
            ),
            Self::EmptyPath => f.write_str("path has no positions"),
            Self::BrokenPath { from, to } => {
                write!(f, "path jumps from {from} to non-adjacent {to}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::OutOfBounds { pos, .. } => Self::OutOfBounds(pos),
            other => Self::Grid(other),
        }
    }
}
