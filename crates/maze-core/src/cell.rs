//! The [`Cell`] type, the kind of a single maze square.

use std::fmt;

/// What occupies one square of a maze.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Wall,
    Open,
    Start,
    Goal,
}

impl Cell {
    /// Every cell kind, in glyph-table order.
    pub const ALL: [Cell; 4] = [Cell::Wall, Cell::Open, Cell::Start, Cell::Goal];

    /// Whether a walker may stand on this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// The character used for this cell in text frames.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Wall => 'X',
            Cell::Open => '_',
            Cell::Start => 'S',
            Cell::Goal => 'O',
        }
    }

    /// Parse a text-frame character.
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Cell> {
        match ch {
            'X' => Some(Cell::Wall),
            '_' => Some(Cell::Open),
            'S' => Some(Cell::Start),
            'O' => Some(Cell::Goal),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::Wall => "wall",
            Cell::Open => "open",
            Cell::Start => "start",
            Cell::Goal => "goal",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for c in Cell::ALL {
            assert_eq!(Cell::from_glyph(c.glyph()), Some(c));
        }
        assert_eq!(Cell::from_glyph('#'), None);
    }

    #[test]
    fn only_walls_block() {
        assert!(!Cell::Wall.is_passable());
        assert!(Cell::Open.is_passable());
        assert!(Cell::Start.is_passable());
        assert!(Cell::Goal.is_passable());
    }
}
