//! The [`Grid`] type: a fixed-size 2D array of maze [`Cell`]s.
//!
//! A `Grid` owns its storage outright. Search and path tracing take it by
//! shared reference; the only code that mutates cells after generation is
//! the animator, which works on its own clone.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Smallest accepted number of rows or columns.
pub const MIN_SIDE: usize = 3;

/// A rectangular maze of `rows × cols` cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

/// Number of cells in a `rows × cols` grid, checking the size limits.
fn cell_count(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows < MIN_SIDE || cols < MIN_SIDE {
        return Err(GridError::TooSmall { rows, cols });
    }
    let n = rows
        .checked_mul(cols)
        .ok_or(GridError::TooLarge { rows, cols })?;
    // Coordinates are i32.
    if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
        return Err(GridError::TooLarge { rows, cols });
    }
    Ok(n)
}

impl Grid {
    /// Create an all-wall grid with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let n = cell_count(rows, cols)?;
        Ok(Self {
            cells: vec![Cell::Wall; n],
            width: cols,
            height: rows,
        })
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// The bounding range, `[0, cols) × [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some((p.y as usize) * self.width + (p.x as usize))
        } else {
            None
        }
    }

    fn out_of_bounds(&self, pos: Point) -> GridError {
        GridError::OutOfBounds {
            pos,
            bounds: self.bounds(),
        }
    }

    /// Read the cell at `p`.
    pub fn cell_at(&self, p: Point) -> Result<Cell, GridError> {
        self.index(p)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_bounds(p))
    }

    /// True iff `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.cell_at(p).is_ok_and(Cell::is_passable)
    }

    /// Overwrite the cell at `p`.
    pub fn set(&mut self, p: Point, cell: Cell) -> Result<(), GridError> {
        let i = self.index(p).ok_or_else(|| self.out_of_bounds(p))?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Fill every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Position of the first cell (row-major) equal to `cell`.
    pub fn find(&self, cell: Cell) -> Option<Point> {
        self.iter().find(|&(_, c)| c == cell).map(|(p, _)| p)
    }

    /// Position of the start marker.
    pub fn start(&self) -> Result<Point, GridError> {
        self.find(Cell::Start).ok_or(GridError::MissingToken(Cell::Start))
    }

    /// Position of the goal marker.
    pub fn goal(&self) -> Result<Point, GridError> {
        self.find(Cell::Goal).ok_or(GridError::MissingToken(Cell::Goal))
    }

    /// Number of cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Check the structural invariants: every border cell is a wall and
    /// there is exactly one start and exactly one goal.
    ///
    /// Connectivity between start and goal is not checked here; running a
    /// search on the grid does that.
    pub fn validate(&self) -> Result<(), GridError> {
        let bounds = self.bounds();
        if let Some(p) = bounds
            .iter()
            .find(|&p| bounds.on_border(p) && self.cell_at(p) != Ok(Cell::Wall))
        {
            return Err(GridError::BorderNotWall(p));
        }
        for token in [Cell::Start, Cell::Goal] {
            let mut found = self.iter().filter(|&(_, c)| c == token).map(|(p, _)| p);
            let first = found.next().ok_or(GridError::MissingToken(token))?;
            if let Some(second) = found.next() {
                return Err(GridError::DuplicateToken {
                    cell: token,
                    first,
                    second,
                });
            }
        }
        Ok(())
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }

    /// One row of cells, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        self.cells.chunks_exact(self.width).nth(y)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.width) {
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse one row per line using the cell glyphs (`X`, `_`, `S`, `O`).
    /// Trailing whitespace and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.chars().count();
        let mut grid = Grid::new(lines.len(), cols)?;
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::InconsistentWidth {
                    line: y,
                    expected: cols,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let cell = Cell::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, pos })?;
                grid.set(pos, cell)?;
            }
        }
        Ok(grid)
    }
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let expected = cell_count(raw.height, raw.width)?;
        if raw.cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            cells: raw.cells,
            width: raw.width,
            height: raw.height,
        })
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: crate::geom::RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let i = self.grid.index(p)?;
        Some((p, self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub cell: Cell,
    pub pos: Point,
}

/// A set of cell changes (a diff frame).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub cells: Vec<FrameCell>,
}

impl Frame {
    /// A frame that repaints every cell of `grid`.
    pub fn full(grid: &Grid) -> Self {
        Self {
            cells: grid
                .iter()
                .map(|(pos, cell)| FrameCell { cell, pos })
                .collect(),
        }
    }

    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Compute the difference between two same-sized grids.
///
/// Returns a [`Frame`] containing only the cells of `curr` that differ
/// from `prev`.
pub fn compute_frame(prev: &Grid, curr: &Grid) -> Frame {
    let cells = curr
        .iter()
        .filter(|&(p, c)| prev.cell_at(p).map_or(true, |pc| pc != c))
        .map(|(pos, cell)| FrameCell { cell, pos })
        .collect();
    Frame { cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
XXXXX
XS__X
X_X_X
X__OX
XXXXX";

    #[test]
    fn new_grid_is_all_wall() {
        let g = Grid::new(3, 4).unwrap();
        assert_eq!(g.dimensions(), (3, 4));
        assert_eq!(g.bounds(), Range::new(0, 0, 4, 3));
        assert_eq!(g.count(Cell::Wall), 12);
    }

    #[test]
    fn new_rejects_tiny_grids() {
        assert_eq!(
            Grid::new(2, 10).unwrap_err(),
            GridError::TooSmall { rows: 2, cols: 10 }
        );
        assert!(Grid::new(10, 0).is_err());
    }

    #[test]
    fn new_rejects_overflowing_sizes() {
        assert_eq!(
            Grid::new(usize::MAX, 3).unwrap_err(),
            GridError::TooLarge {
                rows: usize::MAX,
                cols: 3
            }
        );
    }

    #[test]
    fn cell_at_out_of_bounds() {
        let g = Grid::new(3, 3).unwrap();
        let err = g.cell_at(Point::new(3, 0)).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { pos, .. } if pos == Point::new(3, 0)));
        assert!(g.cell_at(Point::new(-1, 1)).is_err());
        assert!(!g.is_passable(Point::new(0, -1)));
    }

    #[test]
    fn set_and_read_back_uses_column_row_axes() {
        let mut g = Grid::new(3, 5).unwrap();
        g.set(Point::new(3, 1), Cell::Open).unwrap();
        assert_eq!(g.cell_at(Point::new(3, 1)).unwrap(), Cell::Open);
        assert_eq!(g.row(1).unwrap()[3], Cell::Open);
        assert_eq!(g.row(3), None);
        assert!(g.is_passable(Point::new(3, 1)));
        // (1, 3) would be outside a 3-row grid.
        assert!(g.set(Point::new(1, 3), Cell::Open).is_err());
    }

    #[test]
    fn parse_and_display() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!(g.dimensions(), (5, 5));
        assert_eq!(g.start().unwrap(), Point::new(1, 1));
        assert_eq!(g.goal().unwrap(), Point::new(3, 3));
        assert_eq!(g.cell_at(Point::new(2, 2)).unwrap(), Cell::Wall);
        assert_eq!(g.to_string(), format!("{ROOM}\n"));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Grid>().unwrap_err(), GridError::Empty);
        assert!(matches!(
            "XXX\nXX\nXXX".parse::<Grid>().unwrap_err(),
            GridError::InconsistentWidth { line: 1, .. }
        ));
        assert_eq!(
            "XXX\nX#X\nXXX".parse::<Grid>().unwrap_err(),
            GridError::InvalidGlyph {
                ch: '#',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn validate_accepts_room() {
        let g: Grid = ROOM.parse().unwrap();
        assert!(g.validate().is_ok());
    }

    #[test]
    fn validate_rejects_open_border() {
        let g: Grid = "XXXXX\nXS_O_\nXXXXX".parse().unwrap();
        assert_eq!(g.validate(), Err(GridError::BorderNotWall(Point::new(4, 1))));
    }

    #[test]
    fn validate_rejects_token_counts() {
        let g: Grid = "XXXXX\nX___X\nX_O_X\nXXXXX".parse().unwrap();
        assert_eq!(g.validate(), Err(GridError::MissingToken(Cell::Start)));

        let g: Grid = "XXXXX\nXS_SX\nX_O_X\nXXXXX".parse().unwrap();
        assert_eq!(
            g.validate(),
            Err(GridError::DuplicateToken {
                cell: Cell::Start,
                first: Point::new(1, 1),
                second: Point::new(3, 1),
            })
        );
    }

    #[test]
    fn compute_frame_diff() {
        let a: Grid = ROOM.parse().unwrap();
        let mut b = a.clone();
        b.set(Point::new(1, 1), Cell::Open).unwrap();
        b.set(Point::new(2, 1), Cell::Start).unwrap();
        let frame = compute_frame(&a, &b);
        assert_eq!(
            frame.cells,
            vec![
                FrameCell {
                    cell: Cell::Open,
                    pos: Point::new(1, 1)
                },
                FrameCell {
                    cell: Cell::Start,
                    pos: Point::new(2, 1)
                },
            ]
        );
        assert!(compute_frame(&a, &a).is_empty());
        assert_eq!(Frame::full(&a).cells.len(), 25);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g: Grid = "XXX\nXSX\nXOX\nXXX".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn short_cell_list_is_rejected() {
        let err = serde_json::from_str::<Grid>(r#"{"cells":["Wall"],"width":3,"height":3}"#)
            .unwrap_err();
        assert!(err.to_string().contains("expected 9"), "{err}");
    }

    #[test]
    fn undersized_dimensions_are_rejected() {
        let json = r#"{"cells":["Wall","Wall","Wall","Wall"],"width":2,"height":2}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
