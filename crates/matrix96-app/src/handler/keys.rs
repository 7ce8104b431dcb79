//! Key event handlers for different UI modes

use matrix96_core::CellPos;

use crate::editor::EditorField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::ThemeInput => handle_key_theme_input(key),
        UiMode::Editor => handle_key_editor(state, key),
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => {
            if state.controller.selection().is_some() {
                Some(Message::Deselect)
            } else {
                Some(Message::Quit)
            }
        }

        // ─────────────────────────────────────────────────────────
        // Cursor
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveCursor { d_row: -1, d_col: 0 }),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveCursor { d_row: 1, d_col: 0 }),
        InputKey::Left | InputKey::Char('h') => Some(Message::MoveCursor { d_row: 0, d_col: -1 }),
        InputKey::Right | InputKey::Char('l') => Some(Message::MoveCursor { d_row: 0, d_col: 1 }),
        InputKey::Enter => {
            let pos = state.controller.hovered().or_else(|| CellPos::new(0, 0))?;
            Some(Message::SelectCell(pos))
        }

        // ─────────────────────────────────────────────────────────
        // Generation & Analysis
        // ─────────────────────────────────────────────────────────
        InputKey::Char('t' | '/') => Some(Message::StartThemeInput),
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            let theme = state.themes().get(index)?;
            Some(Message::GenerateFromTheme(theme.clone()))
        }
        InputKey::Char('a') => Some(Message::Analyze),

        InputKey::Char('c') => Some(Message::ResetGrid),
        InputKey::Char('e') => Some(Message::ExportSnapshot),

        _ => None,
    }
}

/// Handle key events while typing a theme
fn handle_key_theme_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ThemeInputCancel),
        InputKey::Enter => Some(Message::SubmitTheme),
        InputKey::Backspace => Some(Message::ThemeInputBackspace),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::ThemeInputChar(c)),
        _ => None,
    }
}

/// Handle key events while the cell editor is open
fn handle_key_editor(state: &AppState, key: InputKey) -> Option<Message> {
    let field = state.editor.as_ref().map(|e| e.field)?;

    match key {
        InputKey::Esc => Some(Message::Deselect),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab | InputKey::Down => Some(Message::EditorNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::EditorPrevField),

        InputKey::Left => Some(Message::EditorAdjustIntensity(-1)),
        InputKey::Right => Some(Message::EditorAdjustIntensity(1)),
        InputKey::PageDown => Some(Message::EditorAdjustIntensity(-10)),
        InputKey::PageUp => Some(Message::EditorAdjustIntensity(10)),

        InputKey::Enter => Some(Message::EditorCommit),
        InputKey::Backspace => Some(Message::EditorBackspace),

        InputKey::Char('+') if field == EditorField::Intensity => {
            Some(Message::EditorAdjustIntensity(1))
        }
        InputKey::Char('-') if field == EditorField::Intensity => {
            Some(Message::EditorAdjustIntensity(-1))
        }
        InputKey::Char(c) => Some(Message::EditorInput(c)),

        _ => None,
    }
}
