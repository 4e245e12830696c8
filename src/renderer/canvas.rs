//! Character-cell canvas
//!
//! World space is rasterized onto a grid of terminal cells. A cell is
//! covered by a rectangle when the cell's center lies inside it.

use crossterm::style::Color;
use glam::Vec2;

use crate::sim::Rect;

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub const fn solid(bg: Color) -> Self {
        Self { ch: ' ', fg: bg, bg }
    }
}

/// Grid of cells mapped onto world space
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    /// World units per cell
    cell_size: Vec2,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16, cell_size: Vec2) -> Self {
        Self {
            cols,
            rows,
            cell_size,
            cells: vec![Cell::solid(Color::Reset); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells
            .resize(cols as usize * rows as usize, Cell::solid(Color::Reset));
    }

    /// Fill every cell with `cell`
    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    fn set(&mut self, col: u16, row: u16, cell: Cell) {
        if col < self.cols && row < self.rows {
            self.cells[row as usize * self.cols as usize + col as usize] = cell;
        }
    }

    /// World-space center of a cell
    fn cell_center(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.cell_size.x,
            (row as f32 + 0.5) * self.cell_size.y,
        )
    }

    /// Terminal row containing world y (clamped to the grid)
    pub fn row_for(&self, y: f32) -> u16 {
        let row = (y / self.cell_size.y).floor().max(0.0) as u16;
        row.min(self.rows.saturating_sub(1))
    }

    /// Paint every cell whose center lies inside `rect`
    pub fn fill_rect(&mut self, rect: &Rect, cell: Cell) {
        let col_start = (rect.left() / self.cell_size.x).floor().max(0.0) as u16;
        let col_end = ((rect.right() / self.cell_size.x).ceil().max(0.0) as u16).min(self.cols);
        let row_start = (rect.top() / self.cell_size.y).floor().max(0.0) as u16;
        let row_end = ((rect.bottom() / self.cell_size.y).ceil().max(0.0) as u16).min(self.rows);

        for row in row_start..row_end {
            for col in col_start..col_end {
                if rect.contains(self.cell_center(col, row)) {
                    self.set(col, row, cell);
                }
            }
        }
    }

    /// Write text horizontally centered on `row`, keeping each cell's background
    pub fn text_centered(&mut self, row: u16, text: &str, fg: Color) {
        let len = text.chars().count() as u16;
        let start = self.cols.saturating_sub(len) / 2;
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as u16;
            if let Some(existing) = self.get(col, row) {
                self.set(col, row, Cell { ch, fg, bg: existing.bg });
            }
        }
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: u16) -> &[Cell] {
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }
}
