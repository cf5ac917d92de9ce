use std::io;

use crossterm::style::Color;

use crate::config::{Palette, Rgb};
use crate::grid::{Cell, Grid};
use crate::round::{RoundSnapshot, TickOutcome};
use crate::term::{Coords, Glyph, TermInt, TermManager};

/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_COLUMNS: TermInt = 2;

/// Largest grid whose frame and status line still fit in terminal coordinates.
pub const MAX_GRID_WIDTH: u16 = (u16::MAX - 2) / CELL_COLUMNS;
pub const MAX_GRID_HEIGHT: u16 = u16::MAX - 3;

/// Draws round snapshots as bordered squares. Keeps no game state, only the
/// layout and colours.
pub struct Renderer {
    grid: Grid,
    origin: Coords,
    background: Color,
    border: Color,
    food: Color,
    snake: Color,
}

fn color((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

impl Renderer {
    pub fn new(grid: Grid, palette: &Palette) -> Self {
        Renderer {
            grid,
            // Leave room for the frame
            origin: (1, 1),
            background: color(palette.background),
            border: color(palette.border),
            food: color(palette.food),
            snake: color(palette.snake),
        }
    }

    /// Terminal area needed for the frame, the playfield and the status line.
    pub fn required_size(&self) -> Coords {
        (self.grid.width() * CELL_COLUMNS + 2, self.grid.height() + 3)
    }

    pub fn cell_coords(&self, cell: Cell) -> Coords {
        (self.origin.0 + cell.0 * CELL_COLUMNS, self.origin.1 + cell.1)
    }

    pub fn draw(&self, term: &mut TermManager, snap: &RoundSnapshot) -> io::Result<()> {
        match snap.outcome {
            TickOutcome::Reset => self.draw_full(term, snap),
            TickOutcome::Moved | TickOutcome::Ate => self.draw_update(term, snap),
        }
    }

    /// Repaints the frame and the whole playfield.
    pub fn draw_full(&self, term: &mut TermManager, snap: &RoundSnapshot) -> io::Result<()> {
        term.clear()?;
        let size = (self.grid.width() * CELL_COLUMNS, self.grid.height());
        term.draw_borders(self.origin, size, self.border)?;

        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                self.erase_cell(term, (x, y))?;
            }
        }

        self.draw_update(term, &RoundSnapshot { vacated: None, ..snap.clone() })
    }

    /// Erases the vacated tail, then paints the food and the body on top.
    pub fn draw_update(&self, term: &mut TermManager, snap: &RoundSnapshot) -> io::Result<()> {
        if let Some(tail) = snap.vacated {
            self.erase_cell(term, tail)?;
        }

        self.draw_cell(term, snap.food, self.food)?;
        for cell in snap.body {
            self.draw_cell(term, *cell, self.snake)?;
        }

        term.flush()
    }

    pub fn draw_status(&self, term: &mut TermManager, status: &str) -> io::Result<()> {
        let (width, height) = self.required_size();
        let line = format!("{: <width$}", status, width = width as usize);
        term.print_str_at((0, height - 1), &line)?;
        term.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_cell(&self, term: &mut TermManager, cell: Cell, fill: Color) -> io::Result<()> {
        let (x, y) = self.cell_coords(cell);
        term.print_at((x, y), Glyph::colored('[', self.border, fill))?;
        term.print_at((x + 1, y), Glyph::colored(']', self.border, fill))
    }

    fn erase_cell(&self, term: &mut TermManager, cell: Cell) -> io::Result<()> {
        let (x, y) = self.cell_coords(cell);
        let blank = Glyph { ch: ' ', fg: None, bg: Some(self.background) };
        term.print_at((x, y), blank)?;
        term.print_at((x + 1, y), blank)
    }
}
