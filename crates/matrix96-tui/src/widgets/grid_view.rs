//! The 6x9 grid with its axis labels

use matrix96_app::{GridController, GridGeometry};
use matrix96_core::{CellPos, COLS, ROWS};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use super::cell_view::CellView;
use crate::theme::styles;

/// Width of the `Y=n` gutter
const Y_LABEL_WIDTH: u16 = 4;

/// Where the cells land inside a grid panel occupying `area`.
///
/// Shared by rendering and mouse hit-testing so both agree on placement.
pub fn grid_geometry(area: Rect, show_axis_labels: bool) -> Option<GridGeometry> {
    let inner = styles::glass_block(false).inner(area);
    let (dx, dy) = if show_axis_labels {
        (Y_LABEL_WIDTH, 1)
    } else {
        (0, 0)
    };
    GridGeometry::fit(
        inner.x + dx,
        inner.y + dy,
        inner.width.saturating_sub(dx),
        inner.height.saturating_sub(dy),
    )
}

pub struct GridView<'a> {
    controller: &'a GridController,
    show_axis_labels: bool,
    focused: bool,
}

impl<'a> GridView<'a> {
    pub fn new(controller: &'a GridController) -> Self {
        Self {
            controller,
            show_axis_labels: true,
            focused: false,
        }
    }

    pub fn axis_labels(mut self, show: bool) -> Self {
        self.show_axis_labels = show;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_axis_labels(&self, geometry: &GridGeometry, buf: &mut Buffer) {
        let style = styles::text_muted();
        for col in 0..COLS {
            let Some(pos) = CellPos::new(0, col) else {
                continue;
            };
            let (x, _, w, _) = geometry.cell_area(pos);
            let label = format!("X={}", col + 1);
            let label = if (label.width() as u16) <= w {
                label
            } else {
                (col + 1).to_string()
            };
            let lx = x + w.saturating_sub(label.width() as u16) / 2;
            buf.set_string(lx, geometry.y - 1, label, style);
        }
        for row in 0..ROWS {
            let Some(pos) = CellPos::new(row, 0) else {
                continue;
            };
            let (_, y, _, h) = geometry.cell_area(pos);
            let ly = y + h.saturating_sub(1) / 2;
            buf.set_string(geometry.x - Y_LABEL_WIDTH, ly, format!("Y={}", row + 1), style);
        }
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Matrix {}x{}", ROWS, COLS);
        let block = styles::titled_block(&title, self.focused);
        block.render(area, buf);

        let Some(geometry) = grid_geometry(area, self.show_axis_labels) else {
            let inner = styles::glass_block(false).inner(area);
            buf.set_string(inner.x, inner.y, "Terminal too small", styles::text_muted());
            return;
        };

        if self.show_axis_labels {
            self.render_axis_labels(&geometry, buf);
        }

        let selection = self.controller.selection();
        let hovered = self.controller.hovered();
        for (pos, cell) in self.controller.grid().cells() {
            let (x, y, w, h) = geometry.cell_area(pos);
            CellView::new(cell, pos)
                .selected(selection == Some(pos))
                .hovered(hovered == Some(pos))
                .render(Rect::new(x, y, w, h), buf);
        }
    }
}
