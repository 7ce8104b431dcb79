//! Bottom status bar: hovered-cell tooltip and the last status message

use matrix96_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Tooltip for the hovered cell: `[col, row] value`, or `Empty`
pub fn hover_tooltip(state: &AppState) -> Option<String> {
    let (pos, cell) = state.controller.hovered_cell()?;
    let value = if cell.is_empty() {
        "Empty"
    } else {
        cell.value.as_str()
    };
    Some(format!("{} {}", pos, value))
}

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let mut spans = Vec::new();
        if let Some(tooltip) = hover_tooltip(self.state) {
            spans.push(Span::styled(tooltip, styles::accent()));
            spans.push(Span::styled("  │  ", styles::text_muted()));
        }
        spans.push(Span::styled(
            format!("{}/54 filled", self.state.controller.grid().filled_count()),
            styles::text_secondary(),
        ));
        if let Some(status) = &self.state.status {
            spans.push(Span::styled("  │  ", styles::text_muted()));
            spans.push(Span::styled(status.text.clone(), styles::status(status.level)));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use matrix96_app::StatusMessage;
    use matrix96_core::{CellPatch, CellPos};

    #[test]
    fn test_tooltip_for_empty_and_filled_cells() {
        let mut state = AppState::new();
        assert_eq!(hover_tooltip(&state), None);

        let pos = CellPos::new(2, 4).unwrap();
        state.controller.hover(pos);
        assert_eq!(hover_tooltip(&state).as_deref(), Some("[5, 3] Empty"));

        state.controller.update_cell(pos, CellPatch::value("Au"));
        assert_eq!(hover_tooltip(&state).as_deref(), Some("[5, 3] Au"));
    }

    #[test]
    fn test_renders_status_message() {
        let mut state = AppState::new();
        state.set_status(StatusMessage::error("Generation failed: timeout"));
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("0/54 filled"));
        assert!(term.buffer_contains("Generation failed: timeout"));
    }
}
