//! Terminal renderers for maze frames.
//!
//! Provides the [`Renderer`] trait plus two implementations:
//! [`TerminalRenderer`], a full-screen coloured view driven by crossterm,
//! and [`PlainRenderer`], which prints each frame as glyph text to any
//! [`Write`](std::io::Write) sink.

mod plain;

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use maze_core::{Cell, Frame, Grid};

pub use plain::{PlainRenderer, distance_overlay};

/// Rendering back-end lifecycle: `init`, any number of draws, `close`.
pub trait Renderer {
    /// Prepare the output device.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Paint the whole grid.
    fn draw(&mut self, grid: &Grid) -> Result<(), Box<dyn std::error::Error>>;

    /// Apply the changed cells of `frame` on top of the last drawn grid.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Show a one-line status message below the grid.
    fn status(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>>;

    /// Restore the output device. Must not fail.
    fn close(&mut self);
}

/// Foreground and background colours for a cell kind.
fn cell_colors(c: Cell) -> (CtColor, CtColor) {
    match c {
        Cell::Wall => (
            CtColor::Rgb {
                r: 100,
                g: 100,
                b: 130,
            },
            CtColor::Rgb {
                r: 35,
                g: 35,
                b: 50,
            },
        ),
        Cell::Open => (
            CtColor::Rgb {
                r: 60,
                g: 55,
                b: 50,
            },
            CtColor::Rgb {
                r: 20,
                g: 20,
                b: 30,
            },
        ),
        Cell::Start => (
            CtColor::Rgb {
                r: 255,
                g: 220,
                b: 80,
            },
            CtColor::Rgb {
                r: 20,
                g: 20,
                b: 30,
            },
        ),
        Cell::Goal => (
            CtColor::Rgb {
                r: 80,
                g: 200,
                b: 80,
            },
            CtColor::Rgb {
                r: 20,
                g: 20,
                b: 30,
            },
        ),
    }
}

/// Queue the cursor moves and coloured glyphs for every cell of `frame`.
fn queue_frame<W: Write>(out: &mut W, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
    for fc in &frame.cells {
        let (x, y) = (u16::try_from(fc.pos.x)?, u16::try_from(fc.pos.y)?);
        let (fg, bg) = cell_colors(fc.cell);
        queue!(
            out,
            cursor::MoveTo(x, y),
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
            Print(fc.cell.glyph()),
        )?;
    }
    queue!(out, ResetColor)?;
    Ok(())
}

/// A full-screen, coloured renderer using crossterm's alternate screen.
pub struct TerminalRenderer {
    rows: u16,
    alternate_screen: bool,
}

impl TerminalRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self {
            rows: 0,
            alternate_screen: true,
        }
    }

    /// Configure whether output goes to the alternate screen. Without it
    /// the final frame stays in the scrollback after `close`.
    pub fn with_alternate_screen(mut self, enabled: bool) -> Self {
        self.alternate_screen = enabled;
        self
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();
        if self.alternate_screen {
            execute!(stdout, terminal::EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    fn draw(&mut self, grid: &Grid) -> Result<(), Box<dyn std::error::Error>> {
        self.rows = u16::try_from(grid.height())?;
        self.flush(Frame::full(grid))
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();
        queue_frame(&mut stdout, &frame)?;
        stdout.flush()?;
        Ok(())
    }

    fn status(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, self.rows + 1),
            terminal::Clear(ClearType::CurrentLine),
            Print(text),
        )?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, ResetColor, cursor::Show);
        if self.alternate_screen {
            let _ = execute!(stdout, terminal::LeaveAlternateScreen);
        } else {
            // The caller prints its own summary where the status line was.
            let _ = execute!(
                stdout,
                cursor::MoveTo(0, self.rows + 1),
                terminal::Clear(ClearType::CurrentLine)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{FrameCell, Point};

    #[test]
    fn every_cell_kind_has_distinct_foreground() {
        let mut fgs: Vec<String> = Cell::ALL
            .iter()
            .map(|&c| format!("{:?}", cell_colors(c).0))
            .collect();
        fgs.sort();
        fgs.dedup();
        assert_eq!(fgs.len(), Cell::ALL.len());
    }

    #[test]
    fn queued_frame_moves_cursor_to_each_cell() {
        let frame = Frame {
            cells: vec![
                FrameCell {
                    cell: Cell::Open,
                    pos: Point::new(1, 1),
                },
                FrameCell {
                    cell: Cell::Start,
                    pos: Point::new(2, 1),
                },
            ],
        };
        let mut out: Vec<u8> = Vec::new();
        queue_frame(&mut out, &frame).unwrap();
        let text = String::from_utf8(out).unwrap();
        // Cursor positions are 1-based rows then columns.
        let open = text.find("\x1b[2;2H").unwrap();
        let start = text.find("\x1b[2;3H").unwrap();
        assert!(open < start);
        assert!(text[open..start].ends_with('_'));
        assert!(text[start..].contains('S'));
    }

    #[test]
    fn queued_frame_rejects_negative_positions() {
        let frame = Frame {
            cells: vec![FrameCell {
                cell: Cell::Wall,
                pos: Point::new(-1, 0),
            }],
        };
        assert!(queue_frame(&mut Vec::<u8>::new(), &frame).is_err());
    }
}
