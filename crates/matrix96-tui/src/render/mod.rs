//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use matrix96_app::{AppState, UiMode};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI.
///
/// The only state written is `grid_geometry`, so mouse hit-testing matches
/// what was drawn.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let show_labels = state.settings.ui.show_axis_labels;

    state.grid_geometry = widgets::grid_geometry(areas.grid, show_labels);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);
    frame.render_widget(
        widgets::GridView::new(&state.controller)
            .axis_labels(show_labels)
            .focused(state.ui_mode != UiMode::ThemeInput),
        areas.grid,
    );

    if !areas.side.is_empty() {
        render_side_panel(frame, areas.side, areas.stacked, state);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

fn render_side_panel(frame: &mut Frame, side: Rect, stacked: bool, state: &AppState) {
    let selected = state
        .editor
        .as_ref()
        .zip(state.controller.selected_cell());
    let editor_height = if selected.is_some() {
        widgets::EDITOR_HEIGHT
    } else {
        0
    };
    let (themes, editor, analysis) = if stacked {
        let (themes, detail) = layout::split_stacked(side);
        let (_, editor, analysis) = layout::split_side(detail, 0, editor_height);
        (themes, editor, analysis)
    } else {
        layout::split_side(side, widgets::ThemePanel::height(state), editor_height)
    };

    frame.render_widget(widgets::ThemePanel::new(state), themes);
    if let Some((cell_editor, (pos, cell))) = selected {
        frame.render_widget(widgets::CellEditorPanel::new(pos, cell, cell_editor), editor);
    }
    if !analysis.is_empty() {
        frame.render_widget(widgets::AnalysisPanel::new(&state.controller), analysis);
    }
}
