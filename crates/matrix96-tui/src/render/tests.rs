use super::*;
use crate::test_utils::{create_test_state, TestTerminal};
use matrix96_app::editor::CellEditor;
use matrix96_app::StatusMessage;
use matrix96_core::{CellPatch, CellPos};

fn render(state: &mut AppState, width: u16, height: u16) -> TestTerminal {
    let mut term = TestTerminal::with_size(width, height);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_full_screen_renders_all_panels() {
    let mut state = create_test_state();
    let term = render(&mut state, 120, 40);

    assert!(term.buffer_contains("MATRIX96"));
    assert!(term.buffer_contains("Matrix 6x9"));
    assert!(term.buffer_contains("Cyberpunk Neon"));
    assert!(term.buffer_contains("AI Insights"));
    assert!(term.buffer_contains("0/54 filled"));
}

#[test]
fn test_view_records_grid_geometry() {
    let mut state = create_test_state();
    assert!(state.grid_geometry.is_none());
    render(&mut state, 120, 40);

    let geometry = state.grid_geometry.expect("grid fits");
    let origin = CellPos::new(0, 0).unwrap();
    let (x, y, _, _) = geometry.cell_area(origin);
    assert_eq!(geometry.hit_test(x, y), Some(origin));
}

#[test]
fn test_editor_shown_for_selection() {
    let mut state = create_test_state();
    let pos = CellPos::new(0, 1).unwrap();
    state.controller.update_cell(pos, CellPatch::value("Ne"));
    state.controller.select(pos);
    state.editor = Some(CellEditor::open(state.controller.grid().get(pos)));
    state.ui_mode = UiMode::Editor;

    let term = render(&mut state, 120, 40);
    assert!(term.buffer_contains("Cell [2, 1]"));
    assert!(term.buffer_contains("Intensity"));
}

#[test]
fn test_no_editor_without_selection() {
    let mut state = create_test_state();
    let term = render(&mut state, 120, 40);
    assert!(!term.buffer_contains("Cell ["));
}

#[test]
fn test_status_message_in_status_bar() {
    let mut state = create_test_state();
    state.set_status(StatusMessage::info("Grid cleared"));
    let term = render(&mut state, 120, 40);
    assert!(term.line_contains(39, "Grid cleared"));
}

#[test]
fn test_narrow_terminal_stacks_panels_under_grid() {
    let mut state = create_test_state();
    let epoch = state.controller.grid_epoch();
    state.controller.apply_analysis(epoch, "Mostly blue.".into());
    let term = render(&mut state, 70, 30);
    assert!(term.buffer_contains("Matrix 6x9"));
    assert!(term.buffer_contains("Theme"));
    assert!(term.buffer_contains("AI Insights"));
    assert!(term.buffer_contains("Mostly blue."));
    assert!(state.grid_geometry.is_some());
}

#[test]
fn test_narrow_terminal_shows_editor_for_selection() {
    let mut state = create_test_state();
    let pos = CellPos::new(0, 1).unwrap();
    state.controller.select(pos);
    state.editor = Some(CellEditor::open(state.controller.grid().get(pos)));
    state.ui_mode = UiMode::Editor;

    let term = render(&mut state, 70, 30);
    assert!(term.buffer_contains("Cell [2, 1]"));
}

#[test]
fn test_short_narrow_terminal_shows_only_grid() {
    let mut state = create_test_state();
    let term = render(&mut state, 70, 18);
    assert!(term.buffer_contains("Matrix 6x9"));
    assert!(!term.buffer_contains("AI Insights"));
}

#[test]
fn test_tiny_terminal_clears_geometry() {
    let mut state = create_test_state();
    render(&mut state, 120, 40);
    assert!(state.grid_geometry.is_some());
    render(&mut state, 30, 10);
    assert!(state.grid_geometry.is_none());
}

#[tokio::test]
async fn test_click_on_rendered_cell_selects_it() {
    use matrix96_ai::test_utils::ScriptedGateway;
    use matrix96_app::config::Settings;
    use matrix96_app::input_key::InputMouse;
    use matrix96_app::{Engine, Message};
    use std::sync::Arc;

    let mut engine = Engine::new(Settings::default(), Arc::new(ScriptedGateway::new()));
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &mut engine.state));

    let target = CellPos::new(4, 7).unwrap();
    let geometry = engine.state.grid_geometry.expect("grid fits");
    let (x, y, w, h) = geometry.cell_area(target);
    engine.process_message(Message::Mouse(InputMouse::click(x + w / 2, y + h / 2)));

    assert_eq!(engine.state.controller.selection(), Some(target));
    term.draw_with(|frame| view(frame, &mut engine.state));
    assert!(term.buffer_contains("Cell [8, 5]"));
}
