//! Main update function - handles state transitions (TEA pattern)

use matrix96_core::prelude::*;
use matrix96_core::CellPos;

use crate::controller::export_path;
use crate::editor::CellEditor;
use crate::input_key::{InputMouse, MouseKind};
use crate::message::Message;
use crate::state::{AppState, StatusMessage, UiMode};

use super::{editor, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Mouse(mouse) => handle_mouse(state, mouse),

        Message::Tick => {
            if state.is_busy() {
                state.animation_frame = state.animation_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Grid & Selection
        // ─────────────────────────────────────────────────────────
        Message::ResetGrid => {
            state.controller.reset();
            close_editor(state);
            state.set_status(StatusMessage::info("Grid cleared"));
            UpdateResult::none()
        }

        Message::SelectCell(pos) => {
            state.controller.select(pos);
            state.editor = Some(CellEditor::open(state.controller.grid().get(pos)));
            state.ui_mode = UiMode::Editor;
            UpdateResult::none()
        }

        Message::HoverCell(pos) => {
            state.controller.hover(pos);
            UpdateResult::none()
        }

        Message::Deselect => {
            state.controller.deselect();
            close_editor(state);
            UpdateResult::none()
        }

        Message::MoveCursor { d_row, d_col } => {
            let next = match state.controller.hovered() {
                Some(pos) => Some(pos.offset(d_row, d_col)),
                None => CellPos::new(0, 0),
            };
            if let Some(pos) = next {
                state.controller.hover(pos);
            }
            UpdateResult::none()
        }

        Message::UpdateCell { pos, patch } => {
            let color_changed = patch.color.is_some();
            state.controller.update_cell(pos, patch);
            if color_changed && state.controller.selection() == Some(pos) {
                if let Some(editor) = state.editor.as_mut() {
                    editor.sync_from(state.controller.grid().get(pos));
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Theme Input
        // ─────────────────────────────────────────────────────────
        Message::StartThemeInput => {
            state.controller.deselect();
            state.editor = None;
            state.ui_mode = UiMode::ThemeInput;
            UpdateResult::none()
        }

        Message::ThemeInputChar(c) => {
            state.theme_input.push(c);
            UpdateResult::none()
        }

        Message::ThemeInputBackspace => {
            state.theme_input.pop();
            UpdateResult::none()
        }

        Message::ThemeInputCancel => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::SubmitTheme => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::message(Message::GenerateFromTheme(state.theme_input.clone()))
        }

        // ─────────────────────────────────────────────────────────
        // Generation
        // ─────────────────────────────────────────────────────────
        Message::GenerateFromTheme(theme) => {
            let busy = state.controller.is_generating();
            match state.controller.begin_generation(&theme) {
                Some(theme) => {
                    state.set_status(StatusMessage::info(format!("Generating '{}'...", theme)));
                    UpdateResult::action(UpdateAction::GenerateGrid { theme })
                }
                None => {
                    if busy {
                        state.set_status(StatusMessage::info("Generation already in progress"));
                    }
                    UpdateResult::none()
                }
            }
        }

        Message::GenerationCompleted { grid } => {
            state.controller.apply_generation(*grid);
            if let Some((_, cell)) = state.controller.selected_cell() {
                if let Some(editor) = state.editor.as_mut() {
                    editor.sync_from(cell);
                }
            }
            state.set_status(StatusMessage::info("Grid generated"));
            UpdateResult::none()
        }

        Message::GenerationFailed { error } => {
            state.controller.fail_generation(&error);
            state.set_status(StatusMessage::error(format!("Generation failed: {}", error)));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Analysis
        // ─────────────────────────────────────────────────────────
        Message::Analyze => match state.controller.begin_analysis() {
            Some(grid) => {
                state.set_status(StatusMessage::info("Analyzing grid..."));
                UpdateResult::action(UpdateAction::AnalyzeGrid {
                    epoch: state.controller.grid_epoch(),
                    grid: Box::new(grid),
                })
            }
            None => {
                state.set_status(StatusMessage::info("Analysis already in progress"));
                UpdateResult::none()
            }
        },

        Message::AnalysisCompleted { epoch, text } => {
            if state.controller.apply_analysis(epoch, text) {
                state.set_status(StatusMessage::info("Analysis ready"));
            } else {
                state.set_status(StatusMessage::info("Grid changed, analysis discarded"));
            }
            UpdateResult::none()
        }

        Message::AnalysisFailed { error } => {
            state.controller.fail_analysis(&error);
            state.set_status(StatusMessage::error(format!("Analysis failed: {}", error)));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Export
        // ─────────────────────────────────────────────────────────
        Message::ExportSnapshot => match state.controller.export_snapshot() {
            Ok(bytes) => UpdateResult::action(UpdateAction::SaveSnapshot {
                path: export_path(&state.settings.export.directory),
                bytes,
            }),
            Err(e) => {
                error!("Failed to serialize grid: {}", e);
                state.set_status(StatusMessage::error(format!("Export failed: {}", e)));
                UpdateResult::none()
            }
        },

        Message::SnapshotSaved { path } => {
            state.set_status(StatusMessage::info(format!("Saved {}", path.display())));
            UpdateResult::none()
        }

        Message::SnapshotSaveFailed { error } => {
            state.set_status(StatusMessage::error(format!("Export failed: {}", error)));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Cell Editor
        // ─────────────────────────────────────────────────────────
        Message::EditorNextField => editor::handle_next_field(state),
        Message::EditorPrevField => editor::handle_prev_field(state),
        Message::EditorInput(c) => editor::handle_input(state, c),
        Message::EditorBackspace => editor::handle_backspace(state),
        Message::EditorCommit => editor::handle_commit(state),
        Message::EditorAdjustIntensity(delta) => editor::handle_adjust_intensity(state, delta),
    }
}

/// Map a pointer event onto the grid drawn last frame
fn handle_mouse(state: &mut AppState, mouse: InputMouse) -> UpdateResult {
    let Some(pos) = state
        .grid_geometry
        .and_then(|g| g.hit_test(mouse.column, mouse.row))
    else {
        return UpdateResult::none();
    };

    match mouse.kind {
        MouseKind::LeftClick => UpdateResult::message(Message::SelectCell(pos)),
        MouseKind::Moved => {
            if state.controller.hovered() == Some(pos) {
                UpdateResult::none()
            } else {
                UpdateResult::message(Message::HoverCell(pos))
            }
        }
    }
}

fn close_editor(state: &mut AppState) {
    state.editor = None;
    if state.ui_mode == UiMode::Editor {
        state.ui_mode = UiMode::Normal;
    }
}
