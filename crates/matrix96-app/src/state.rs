//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::controller::GridController;
use crate::editor::CellEditor;
use crate::geometry::GridGeometry;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Cursor moves over the grid
    #[default]
    Normal,

    /// Typing a free-text theme
    ThemeInput,

    /// A cell is selected and the editor has focus
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// One-line status shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Error,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Default)]
pub struct AppState {
    pub controller: GridController,

    pub ui_mode: UiMode,

    /// Theme input buffer (ThemeInput mode)
    pub theme_input: String,

    /// Editor for the selected cell; `Some` iff a cell is selected
    pub editor: Option<CellEditor>,

    pub status: Option<StatusMessage>,

    pub settings: Settings,

    /// Where the grid was last drawn; set by the renderer
    pub grid_geometry: Option<GridGeometry>,

    /// Spinner frame for busy indicators, advanced on Tick
    pub animation_frame: u8,

    quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Quick-pick themes, in key order
    pub fn themes(&self) -> &[String] {
        &self.settings.ui.themes
    }

    pub fn is_busy(&self) -> bool {
        self.controller.is_generating() || self.controller.is_analyzing()
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
