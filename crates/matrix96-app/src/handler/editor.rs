//! Cell editor handlers
//!
//! Edits are turned into `Message::UpdateCell` follow-ups so every grid
//! mutation goes through the same path.

use matrix96_core::CellPatch;

use crate::editor::EditorField;
use crate::message::Message;
use crate::state::{AppState, StatusMessage};

use super::UpdateResult;

pub fn handle_next_field(state: &mut AppState) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        editor.next_field();
    }
    UpdateResult::none()
}

pub fn handle_prev_field(state: &mut AppState) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        editor.prev_field();
    }
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    let Some((pos, cell)) = state.controller.selected_cell() else {
        return UpdateResult::none();
    };
    let Some(editor) = state.editor.as_mut() else {
        return UpdateResult::none();
    };

    match editor.field {
        EditorField::Value => {
            let mut value = cell.value.clone();
            value.push(c);
            UpdateResult::message(Message::UpdateCell {
                pos,
                patch: CellPatch::value(value),
            })
        }
        EditorField::Color => {
            editor.color_buffer.push(c);
            UpdateResult::none()
        }
        EditorField::Intensity => UpdateResult::none(),
    }
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    let Some((pos, cell)) = state.controller.selected_cell() else {
        return UpdateResult::none();
    };
    let Some(editor) = state.editor.as_mut() else {
        return UpdateResult::none();
    };

    match editor.field {
        EditorField::Value => {
            let mut value = cell.value.clone();
            if value.pop().is_none() {
                return UpdateResult::none();
            }
            UpdateResult::message(Message::UpdateCell {
                pos,
                patch: CellPatch::value(value),
            })
        }
        EditorField::Color => {
            editor.color_buffer.pop();
            UpdateResult::none()
        }
        EditorField::Intensity => UpdateResult::none(),
    }
}

/// Enter: commit the color buffer, or close the editor from other fields
pub fn handle_commit(state: &mut AppState) -> UpdateResult {
    let Some(pos) = state.controller.selection() else {
        return UpdateResult::none();
    };
    let Some(editor) = state.editor.as_ref() else {
        return UpdateResult::none();
    };

    if editor.field != EditorField::Color {
        return UpdateResult::message(Message::Deselect);
    }

    match editor.committable_color() {
        Some(color) => UpdateResult::message(Message::UpdateCell {
            pos,
            patch: CellPatch::color(color),
        }),
        None => {
            let text = format!("'{}' is not a hex color", editor.color_buffer.trim());
            state.set_status(StatusMessage::error(text));
            UpdateResult::none()
        }
    }
}

pub fn handle_adjust_intensity(state: &AppState, delta: i64) -> UpdateResult {
    let Some((pos, cell)) = state.controller.selected_cell() else {
        return UpdateResult::none();
    };
    let next = cell.intensity.saturating_add(delta);
    if next == cell.intensity {
        return UpdateResult::none();
    }
    UpdateResult::message(Message::UpdateCell {
        pos,
        patch: CellPatch::intensity(next.value() as i64),
    })
}
