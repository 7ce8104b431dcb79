//! A single grid cell
//!
//! Shows the cell value (or its `col,row` placeholder) on the cell color,
//! blended onto the canvas by intensity. The selected cell gets the active
//! border, the hovered cell a lighter outline.

use matrix96_core::{parse_hex_color, Cell, CellPos, ACTIVE_CELL_COLOR, DEFAULT_CELL_COLOR};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::palette;

/// Background a cell is drawn with: its color at its intensity's opacity
pub fn cell_background(cell: &Cell) -> Color {
    let color = parse_hex_color(&cell.color)
        .or_else(|| parse_hex_color(DEFAULT_CELL_COLOR))
        .unwrap_or(palette::CANVAS_RGB);
    palette::to_color(color.blend_over(palette::CANVAS_RGB, cell.intensity.opacity()))
}

/// Text shown in a cell: its value, or the 1-based `col,row` placeholder
pub fn display_text(cell: &Cell, pos: CellPos) -> String {
    if cell.is_empty() {
        pos.label()
    } else {
        cell.value.clone()
    }
}

fn foreground_for(background: Color) -> Color {
    match background {
        Color::Rgb(r, g, b) if matrix96_core::Rgb::new(r, g, b).luminance() > 0.55 => {
            palette::TEXT_ON_LIGHT
        }
        _ => palette::TEXT_PRIMARY,
    }
}

fn selected_border() -> Color {
    parse_hex_color(ACTIVE_CELL_COLOR)
        .map(palette::to_color)
        .unwrap_or(palette::BORDER_ACTIVE)
}

/// Truncate to `width` columns, ending with an ellipsis when cut
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub struct CellView<'a> {
    cell: &'a Cell,
    pos: CellPos,
    selected: bool,
    hovered: bool,
}

impl<'a> CellView<'a> {
    pub fn new(cell: &'a Cell, pos: CellPos) -> Self {
        Self {
            cell,
            pos,
            selected: false,
            hovered: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }
}

impl Widget for CellView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let bg = cell_background(self.cell);
        buf.set_style(area, Style::default().bg(bg));

        let inner = if area.width >= 3 && area.height >= 3 && (self.selected || self.hovered) {
            let (border_type, color) = if self.selected {
                (BorderType::Thick, selected_border())
            } else {
                (BorderType::Plain, palette::HOVER)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(color).bg(bg));
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if inner.is_empty() {
            return;
        }

        let mut style = Style::default().fg(foreground_for(bg)).bg(bg);
        if self.cell.is_empty() {
            style = style.add_modifier(Modifier::DIM);
        } else {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.selected && inner == area {
            // no room for a border
            style = style.add_modifier(Modifier::REVERSED);
        }

        let text = fit_width(&display_text(self.cell, self.pos), inner.width as usize);
        let x = inner.x + (inner.width.saturating_sub(text.width() as u16)) / 2;
        let y = inner.y + inner.height.saturating_sub(1) / 2;
        buf.set_string(x, y, text, style);
    }
}
