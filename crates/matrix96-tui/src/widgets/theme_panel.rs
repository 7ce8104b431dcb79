//! Theme input and preset list

use matrix96_app::{AppState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct ThemePanel<'a> {
    state: &'a AppState,
}

impl<'a> ThemePanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Rows needed: input line, blank, one per preset, plus borders
    pub fn height(state: &AppState) -> u16 {
        state.themes().len().min(9) as u16 + 4
    }
}

impl Widget for ThemePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let editing = self.state.ui_mode == UiMode::ThemeInput;
        let block = styles::titled_block("Theme", editing);

        let input = if self.state.theme_input.is_empty() && !editing {
            Span::styled("press t to describe a theme", styles::text_muted())
        } else {
            Span::styled(self.state.theme_input.clone(), styles::text_primary())
        };
        let mut input_line = vec![Span::styled("> ", styles::accent()), input];
        if editing {
            input_line.push(Span::styled(
                "_",
                styles::accent().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let mut lines = vec![Line::from(input_line), Line::default()];
        let busy = self.state.controller.is_generating();
        for (i, theme) in self.state.themes().iter().take(9).enumerate() {
            let style = if busy {
                styles::text_muted()
            } else {
                styles::text_secondary()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", i + 1), styles::keybinding()),
                Span::styled(theme.clone(), style),
            ]));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_lists_presets() {
        let state = AppState::new();
        let mut term = TestTerminal::with_size(40, ThemePanel::height(&state));
        term.render_widget(ThemePanel::new(&state), term.area());
        assert!(term.buffer_contains("1 Cyberpunk Neon"));
        assert!(term.buffer_contains("6 Productivity Planner"));
        assert!(term.buffer_contains("press t"));
    }

    #[test]
    fn test_shows_typed_theme() {
        let mut state = AppState::new();
        state.ui_mode = UiMode::ThemeInput;
        state.theme_input = "Deep Ocean".into();
        let mut term = TestTerminal::with_size(40, ThemePanel::height(&state));
        term.render_widget(ThemePanel::new(&state), term.area());
        assert!(term.buffer_contains("> Deep Ocean_"));
    }
}
