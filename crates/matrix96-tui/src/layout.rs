//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the side panel holding themes, the cell editor and analysis
pub const SIDE_PANEL_WIDTH: u16 = 36;

/// Below this width the side panel moves under the grid
pub const MIN_WIDTH_FOR_SIDE_PANEL: u16 = 80;

/// Stacked panels need this much body height; shorter screens show only the grid
pub const MIN_HEIGHT_FOR_STACKED_PANELS: u16 = 16;

/// Share of the body given to the stacked panels
const STACKED_PANEL_PERCENT: u16 = 45;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and key hints
    pub header: Rect,

    /// The grid panel
    pub grid: Rect,

    /// Themes, cell editor and analysis; empty when nothing fits
    pub side: Rect,

    /// `side` sits under the grid instead of beside it
    pub stacked: bool,

    /// Single-row status bar
    pub status: Rect,
}

/// Split the screen into header, body (grid + side panel) and status bar
///
/// Wide terminals put the side panel right of the grid. Narrow ones stack it
/// below, unless the body is too short, in which case the grid takes it all.
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let (grid, side, stacked) = if body.width >= MIN_WIDTH_FOR_SIDE_PANEL {
        let [grid, side] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(SIDE_PANEL_WIDTH)])
                .areas(body);
        (grid, side, false)
    } else if body.height >= MIN_HEIGHT_FOR_STACKED_PANELS {
        let [grid, side] = Layout::vertical([
            Constraint::Min(8),
            Constraint::Percentage(STACKED_PANEL_PERCENT),
        ])
        .areas(body);
        (grid, side, true)
    } else {
        (body, Rect::new(body.x, body.bottom(), body.width, 0), true)
    };

    ScreenAreas {
        header,
        grid,
        side,
        status,
        stacked,
    }
}

/// Split stacked panels side by side: themes left, editor and analysis right
pub fn split_stacked(side: Rect) -> (Rect, Rect) {
    let [themes, detail] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(side);
    (themes, detail)
}

/// Stack the side panel: theme list, optional editor, analysis below
pub fn split_side(side: Rect, theme_height: u16, editor_height: u16) -> (Rect, Rect, Rect) {
    let [themes, editor, analysis] = Layout::vertical([
        Constraint::Length(theme_height),
        Constraint::Length(editor_height),
        Constraint::Min(0),
    ])
    .areas(side);
    (themes, editor, analysis)
}
