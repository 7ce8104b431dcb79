//! Cell editor state for the selected cell

use matrix96_core::{parse_hex_color, Cell};

/// Fields of the cell editor, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Value,
    Color,
    Intensity,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            Self::Value => Self::Color,
            Self::Color => Self::Intensity,
            Self::Intensity => Self::Value,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Value => Self::Intensity,
            Self::Color => Self::Value,
            Self::Intensity => Self::Color,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Value => "Value",
            Self::Color => "Color",
            Self::Intensity => "Intensity",
        }
    }
}

/// Editor state while a cell is selected.
///
/// Value and intensity edits go straight to the cell. The color is typed into
/// a buffer and only committed once it parses as a hex color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellEditor {
    pub field: EditorField,
    pub color_buffer: String,
}

impl CellEditor {
    /// Open the editor on `cell`, seeding the color buffer from it
    pub fn open(cell: &Cell) -> Self {
        Self {
            field: EditorField::Value,
            color_buffer: cell.color.clone(),
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Color to commit, if the buffer holds a valid hex color
    pub fn committable_color(&self) -> Option<String> {
        let trimmed = self.color_buffer.trim();
        parse_hex_color(trimmed).map(|_| {
            if trimmed.starts_with('#') {
                trimmed.to_string()
            } else {
                format!("#{trimmed}")
            }
        })
    }

    pub fn color_is_valid(&self) -> bool {
        self.committable_color().is_some()
    }

    /// Reload the buffer after the cell changed underneath the editor
    pub fn sync_from(&mut self, cell: &Cell) {
        self.color_buffer = cell.color.clone();
    }
}
