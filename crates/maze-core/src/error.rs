//! Errors raised by grid construction, access and validation.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// Errors that can occur when building, reading or checking a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A position outside the grid was accessed.
    OutOfBounds { pos: Point, bounds: Range },
    /// A grid needs at least 3 rows and 3 columns so an interior exists.
    TooSmall { rows: usize, cols: usize },
    /// `rows * cols` does not fit in memory.
    TooLarge { rows: usize, cols: usize },
    /// Stored cells do not match the declared dimensions.
    SizeMismatch { expected: usize, found: usize },
    /// A border cell is not a wall.
    BorderNotWall(Point),
    /// The grid has no cell of the given kind.
    MissingToken(Cell),
    /// The grid has more than one cell of the given kind.
    DuplicateToken { cell: Cell, first: Point, second: Point },
    /// Text input had no lines.
    Empty,
    /// Text input lines have different widths.
    InconsistentWidth { line: usize, expected: usize, found: usize },
    /// Text input contains a character that is not a cell glyph.
    InvalidGlyph { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} is outside grid bounds {bounds}")
            }
            Self::TooSmall { rows, cols } => {
                write!(f, "grid of {rows}x{cols} is too small (minimum 3x3)")
            }
            Self::TooLarge { rows, cols } => write!(f, "grid of {rows}x{cols} is too large"),
            Self::SizeMismatch { expected, found } => {
                write!(f, "grid holds {found} cells, expected {expected}")
            }
            Self::BorderNotWall(p) => write!(f, "border cell {p} is not a wall"),
            Self::MissingToken(c) => write!(f, "grid has no {c} cell"),
            Self::DuplicateToken { cell, first, second } => {
                write!(f, "grid has more than one {cell} cell: {first} and {second}")
            }
            Self::Empty => f.write_str("grid text is empty"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "invalid glyph \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
