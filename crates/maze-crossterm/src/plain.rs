//! Glyph-text output, one full grid per frame.

use std::io::Write;

use maze_core::{Cell, Frame, Grid};
use maze_paths::DistanceMap;

use crate::Renderer;

/// Prints every frame as the complete grid followed by a blank line.
///
/// Status lines are not printed: the output is a transcript of frames and
/// the caller prints its own summary after the last one.
pub struct PlainRenderer<W: Write> {
    out: W,
    grid: Option<Grid>,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, grid: None }
    }

    /// Give back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_grid(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(grid) = &self.grid {
            writeln!(self.out, "{grid}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    fn draw(&mut self, grid: &Grid) -> Result<(), Box<dyn std::error::Error>> {
        self.grid = Some(grid.clone());
        self.print_grid()
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        let Some(grid) = self.grid.as_mut() else {
            return Err("plain renderer: flush before draw".into());
        };
        for fc in frame.cells {
            grid.set(fc.pos, fc.cell)?;
        }
        self.print_grid()
    }

    fn status(&mut self, _text: &str) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    fn close(&mut self) {
        let _ = self.out.flush();
    }
}

/// The grid as text with every reached open cell replaced by its distance
/// from the search origin, modulo 10.
pub fn distance_overlay(grid: &Grid, map: &DistanceMap) -> String {
    let mut s = String::with_capacity((grid.width() + 1) * grid.height());
    for (p, cell) in grid.iter() {
        let ch = match map.at(p) {
            Some(d) if cell == Cell::Open => char::from_digit((d % 10) as u32, 10).unwrap_or('?'),
            _ => cell.glyph(),
        };
        s.push(ch);
        if p.x as usize == grid.width() - 1 {
            s.push('\n');
        }
    }
    s
}
