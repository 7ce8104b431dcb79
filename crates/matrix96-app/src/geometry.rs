//! Grid geometry in terminal coordinates
//!
//! The renderer records where it drew the grid; mouse events are mapped back
//! to a [`CellPos`] through [`GridGeometry::hit_test`].

use matrix96_core::{CellPos, COLS, ROWS};

/// Placement of the cell area on screen (axis labels excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub x: u16,
    pub y: u16,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl GridGeometry {
    /// Largest uniform cell size that fits in the given area.
    ///
    /// Returns `None` when the area cannot hold one column per cell.
    pub fn fit(x: u16, y: u16, width: u16, height: u16) -> Option<Self> {
        let cell_width = width / COLS as u16;
        let cell_height = height / ROWS as u16;
        if cell_width == 0 || cell_height == 0 {
            return None;
        }
        Some(Self {
            x,
            y,
            cell_width,
            cell_height,
        })
    }

    pub fn width(&self) -> u16 {
        self.cell_width * COLS as u16
    }

    pub fn height(&self) -> u16 {
        self.cell_height * ROWS as u16
    }

    /// `(x, y, width, height)` of one cell
    pub fn cell_area(&self, pos: CellPos) -> (u16, u16, u16, u16) {
        (
            self.x + pos.col() as u16 * self.cell_width,
            self.y + pos.row() as u16 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Cell under a terminal coordinate, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<CellPos> {
        if column < self.x || row < self.y {
            return None;
        }
        let col = ((column - self.x) / self.cell_width) as usize;
        let r = ((row - self.y) / self.cell_height) as usize;
        CellPos::new(r, col)
    }
}
