//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use matrix96_ai::GeneratedGrid;
use matrix96_core::{CellPatch, CellPos};

use crate::input_key::{InputKey, InputMouse};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mouse event from terminal
    Mouse(InputMouse),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Grid & Selection
    // ─────────────────────────────────────────────────────────
    /// Empty every cell (the clear button)
    ResetGrid,

    /// Select a cell and open the editor
    SelectCell(CellPos),

    /// Move the hover cursor to a cell
    HoverCell(CellPos),

    /// Clear the selection and close the editor
    Deselect,

    /// Move the hover cursor by a row/column delta
    MoveCursor { d_row: isize, d_col: isize },

    /// Merge a partial update into one cell
    UpdateCell { pos: CellPos, patch: CellPatch },

    // ─────────────────────────────────────────────────────────
    // Theme Input
    // ─────────────────────────────────────────────────────────
    StartThemeInput,
    ThemeInputChar(char),
    ThemeInputBackspace,
    ThemeInputCancel,
    /// Submit the theme input buffer
    SubmitTheme,

    // ─────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────
    /// Request a grid for a theme
    GenerateFromTheme(String),

    GenerationCompleted { grid: Box<GeneratedGrid> },

    GenerationFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────
    /// Request an analysis of the current grid
    Analyze,

    /// Analysis text for the grid at `epoch`
    AnalysisCompleted { epoch: u64, text: String },

    AnalysisFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────
    /// Save the grid to the export directory
    ExportSnapshot,

    SnapshotSaved { path: PathBuf },

    SnapshotSaveFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Cell Editor
    // ─────────────────────────────────────────────────────────
    EditorNextField,
    EditorPrevField,
    /// Character typed into the focused editor field
    EditorInput(char),
    EditorBackspace,
    /// Commit the color buffer
    EditorCommit,
    /// Nudge the selected cell's intensity
    EditorAdjustIntensity(i64),
}
