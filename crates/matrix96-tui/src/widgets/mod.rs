//! Widget components for the TUI

mod analysis_panel;
mod cell_editor;
mod cell_view;
mod grid_view;
mod header;
mod status_bar;
mod theme_panel;

pub use analysis_panel::{AnalysisPanel, NO_ANALYSIS};
pub use cell_editor::{CellEditorPanel, EDITOR_HEIGHT};
pub use cell_view::{cell_background, display_text, fit_width, CellView};
pub use grid_view::{grid_geometry, GridView};
pub use header::MainHeader;
pub use status_bar::{hover_tooltip, StatusBar};
pub use theme_panel::ThemePanel;
