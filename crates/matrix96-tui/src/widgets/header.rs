//! Header bar: title, busy indicators, and key hints

use matrix96_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn busy_spans(&self) -> Vec<Span<'static>> {
        let controller = &self.state.controller;
        let spinner = SPINNER[self.state.animation_frame as usize % SPINNER.len()];
        let mut spans = Vec::new();
        if controller.is_generating() {
            spans.push(Span::styled(format!(" {spinner} generating"), styles::busy()));
        }
        if controller.is_analyzing() {
            spans.push(Span::styled(format!(" {spinner} analyzing"), styles::busy()));
        }
        spans
    }
}

fn hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, styles::keybinding()),
        Span::styled(format!(" {label}  "), styles::text_muted()),
    ]
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled("MATRIX96", styles::accent_bold()),
            Span::styled(" AI grid", styles::text_secondary()),
        ];
        spans.extend(self.busy_spans());
        Line::from(spans).render(inner, buf);

        let hints: Vec<Span> = [
            hint("t", "theme"),
            hint("a", "analyze"),
            hint("c", "clear"),
            hint("e", "export"),
            hint("q", "quit"),
        ]
        .into_iter()
        .flatten()
        .collect();
        let hints = Line::from(hints);
        let width = hints.width() as u16;
        if width + 30 <= inner.width {
            let hint_area = Rect::new(inner.right() - width, inner.y, width, 1);
            hints.render(hint_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_hints() {
        let state = AppState::new();
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(MainHeader::new(&state), term.area());
        assert!(term.buffer_contains("MATRIX96"));
        assert!(term.buffer_contains("analyze"));
        assert!(!term.buffer_contains("generating"));
    }

    #[test]
    fn test_header_shows_busy_indicators() {
        let mut state = AppState::new();
        state.controller.begin_generation("Ocean");
        state.controller.begin_analysis();
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(MainHeader::new(&state), term.area());
        assert!(term.buffer_contains("generating"));
        assert!(term.buffer_contains("analyzing"));
    }
}
