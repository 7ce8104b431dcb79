//! Editor for the selected cell

use matrix96_app::editor::{CellEditor, EditorField};
use matrix96_core::{Cell, CellPos};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::cell_view::cell_background;
use crate::theme::{palette, styles};

/// Rows used when open (three fields, hint line, borders)
pub const EDITOR_HEIGHT: u16 = 6;

const GAUGE_WIDTH: usize = 10;

pub struct CellEditorPanel<'a> {
    pos: CellPos,
    cell: &'a Cell,
    editor: &'a CellEditor,
}

impl<'a> CellEditorPanel<'a> {
    pub fn new(pos: CellPos, cell: &'a Cell, editor: &'a CellEditor) -> Self {
        Self { pos, cell, editor }
    }

    fn field_line(&self, field: EditorField, value: Vec<Span<'static>>) -> Line<'static> {
        let focused = self.editor.field == field;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let mut spans = vec![
            Span::styled(marker, styles::accent()),
            Span::styled(format!("{:<10}", field.label()), label_style),
        ];
        spans.extend(value);
        Line::from(spans)
    }
}

fn intensity_gauge(value: u8) -> String {
    let filled = (value as usize * GAUGE_WIDTH + 50) / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(GAUGE_WIDTH - filled)
    )
}

impl Widget for CellEditorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Cell {}", self.pos);
        let block = styles::titled_block(&title, true);

        let value = if self.cell.value.is_empty() {
            Span::styled("(empty)", styles::text_muted())
        } else {
            Span::styled(self.cell.value.clone(), styles::text_primary())
        };

        let color_style = if self.editor.color_is_valid() {
            styles::text_primary()
        } else {
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::ITALIC)
        };
        let swatch = Span::styled("  ", Style::default().bg(cell_background(self.cell)));
        let color = vec![
            swatch,
            Span::raw(" "),
            Span::styled(self.editor.color_buffer.clone(), color_style),
        ];

        let level = self.cell.intensity.value();
        let intensity = vec![
            Span::styled(intensity_gauge(level), styles::accent()),
            Span::styled(format!(" {}", self.cell.intensity), styles::text_primary()),
        ];

        let lines = vec![
            self.field_line(EditorField::Value, vec![value]),
            self.field_line(EditorField::Color, color),
            self.field_line(EditorField::Intensity, intensity),
            Line::from(Span::styled(
                "Tab field  ←→ ±1  PgUp/Dn ±10",
                styles::text_muted(),
            )),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use matrix96_core::Intensity;

    #[test]
    fn test_shows_fields_for_selected_cell() {
        let pos = CellPos::new(1, 2).unwrap();
        let cell = Cell::new(pos, "Fe", "#ff8800", Intensity::clamped(40));
        let editor = CellEditor::open(&cell);
        let mut term = TestTerminal::with_size(50, EDITOR_HEIGHT);
        term.render_widget(CellEditorPanel::new(pos, &cell, &editor), term.area());

        assert!(term.buffer_contains("Cell [3, 2]"));
        assert!(term.buffer_contains("> Value"));
        assert!(term.buffer_contains("Fe"));
        assert!(term.buffer_contains("#ff8800"));
        assert!(term.buffer_contains("40%"));
    }

    #[test]
    fn test_gauge_scales_with_intensity() {
        assert_eq!(intensity_gauge(0), "░".repeat(10));
        assert_eq!(intensity_gauge(100), "█".repeat(10));
        assert!(intensity_gauge(50).starts_with("█████░"));
    }
}
