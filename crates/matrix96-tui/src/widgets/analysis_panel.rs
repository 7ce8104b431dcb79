//! Read-only analysis text

use matrix96_app::GridController;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub const NO_ANALYSIS: &str = "No active analysis.";

pub struct AnalysisPanel<'a> {
    controller: &'a GridController,
}

impl<'a> AnalysisPanel<'a> {
    pub fn new(controller: &'a GridController) -> Self {
        Self { controller }
    }
}

impl Widget for AnalysisPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("AI Insights", false);
        let paragraph = match self.controller.analysis() {
            Some(text) => Paragraph::new(text.to_string()).style(styles::text_primary()),
            None if self.controller.is_analyzing() => {
                Paragraph::new("Analyzing...").style(styles::busy())
            }
            None => Paragraph::new(NO_ANALYSIS).style(styles::text_muted()),
        };
        paragraph
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
