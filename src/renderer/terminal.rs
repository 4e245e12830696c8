//! Terminal presentation via crossterm

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{DisableFocusChange, EnableFocusChange},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use glam::Vec2;

use super::canvas::{Canvas, Cell};
use super::hud::hud_lines;
use crate::sim::{GameMode, Rect, Snapshot};

const SKY: Color = Color::Rgb { r: 70, g: 180, b: 200 };
const OUT_OF_WORLD: Color = Color::Rgb { r: 20, g: 20, b: 30 };
const PIPE: Color = Color::Rgb { r: 0, g: 200, b: 0 };
const ACTOR: Color = Color::Rgb { r: 245, g: 200, b: 66 };
const ACTOR_OVER: Color = Color::Rgb { r: 225, g: 75, b: 35 };
const TEXT: Color = Color::White;

/// Raw mode + alternate screen for as long as this value lives
///
/// Dropping it restores the terminal, including on panic unwind.
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    pub fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let session = Self { active: true };
        execute!(out, EnterAlternateScreen, cursor::Hide, EnableFocusChange)?;
        Ok(session)
    }

    pub fn leave(mut self) -> io::Result<()> {
        self.active = false;
        restore(&mut io::stdout())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = restore(&mut io::stdout());
        }
    }
}

fn restore(out: &mut impl Write) -> io::Result<()> {
    execute!(out, DisableFocusChange, ResetColor, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()
}

/// Draws snapshots onto a cell canvas and flushes it to the terminal
pub struct TerminalRenderer {
    canvas: Canvas,
}

impl TerminalRenderer {
    pub fn new(cols: u16, rows: u16, cell_size: Vec2) -> Self {
        Self {
            canvas: Canvas::new(cols, rows, cell_size),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.canvas.resize(cols, rows);
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Rasterize a snapshot without touching the terminal
    pub fn compose(&mut self, snapshot: &Snapshot<'_>) {
        self.canvas.clear(Cell::solid(OUT_OF_WORLD));
        self.canvas.fill_rect(
            &Rect::new(0.0, 0.0, snapshot.world.x, snapshot.world.y),
            Cell::solid(SKY),
        );

        for barrier in snapshot.barriers() {
            self.canvas.fill_rect(&barrier, Cell::solid(PIPE));
        }

        let actor = if snapshot.mode == GameMode::Over {
            ACTOR_OVER
        } else {
            ACTOR
        };
        self.canvas.fill_rect(&snapshot.actor, Cell::solid(actor));

        for line in hud_lines(snapshot) {
            let row = self.canvas.row_for(line.y);
            self.canvas.text_centered(row, &line.text, TEXT);
        }
    }

    /// Compose and write one full frame
    pub fn draw(&mut self, snapshot: &Snapshot<'_>, out: &mut impl Write) -> io::Result<()> {
        self.compose(snapshot);

        for row in 0..self.canvas.rows() {
            queue!(out, cursor::MoveTo(0, row))?;
            let mut fg = None;
            let mut bg = None;
            for cell in self.canvas.row(row) {
                if fg != Some(cell.fg) {
                    queue!(out, SetForegroundColor(cell.fg))?;
                    fg = Some(cell.fg);
                }
                if bg != Some(cell.bg) {
                    queue!(out, SetBackgroundColor(cell.bg))?;
                    bg = Some(cell.bg);
                }
                queue!(out, Print(cell.ch))?;
            }
        }
        queue!(out, ResetColor)?;
        out.flush()
    }
}
