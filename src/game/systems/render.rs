//! Game rendering system (terminal).
//!
//! The loop only talks to the [`Renderer`] trait. [`TerminalRenderer`] is the
//! real implementation and writes glyph rows, a footer rule and a status line
//! to any `Write` sink, using crossterm commands for cursor movement.

use std::fmt;
use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::game::grid::Grid;

/// Sink for rendered frames.
pub trait Renderer {
    /// Move the cursor home so the next frame overwrites the previous one.
    fn clear(&mut self) -> io::Result<()>;

    /// Draw one line of glyphs per grid row.
    fn render_grid(&mut self, grid: &Grid) -> io::Result<()>;

    /// Draw a `width`-long rule followed by the status line.
    fn render_footer(&mut self, width: usize, status: &Status) -> io::Result<()>;
}

/// Counters shown below the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub frame_count: u64,
    pub live_cells: usize,
    pub elapsed_secs: u64,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " Gen: {} | Cells: {} | Elapsed Time: {}s | FPS: ",
            self.frame_count, self.live_cells, self.elapsed_secs
        )?;
        // Plain decimal, no thousands separator.
        if self.elapsed_secs > 0 {
            write!(f, "{:.1}", self.frame_count as f64 / self.elapsed_secs as f64)
        } else {
            write!(f, "Calculating...")
        }
    }
}

pub struct TerminalRenderer<W: Write> {
    writer: W,
    cell: String,
    empty: String,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(writer: W, cell: impl Into<String>, empty: impl Into<String>) -> Self {
        Self {
            writer,
            cell: cell.into(),
            empty: empty.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.writer, MoveTo(0, 0))?;
        self.writer.flush()
    }

    fn render_grid(&mut self, grid: &Grid) -> io::Result<()> {
        for row in grid.rows() {
            let line: String = row
                .iter()
                .map(|&alive| if alive { self.cell.as_str() } else { self.empty.as_str() })
                .collect();
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()
    }

    fn render_footer(&mut self, width: usize, status: &Status) -> io::Result<()> {
        writeln!(self.writer, "{}", "_".repeat(width))?;
        // Wipe leftovers of a longer previous status line.
        write!(self.writer, "\r")?;
        queue!(self.writer, Clear(ClearType::UntilNewLine))?;
        writeln!(self.writer, "{}", status)?;
        self.writer.flush()
    }
}
