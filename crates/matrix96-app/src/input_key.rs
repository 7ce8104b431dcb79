//! Abstract input events, independent of terminal library.
//!
//! Converted from crossterm events at the TUI boundary so the app crate
//! never depends on crossterm.

/// Abstract key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

/// What the pointer did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    LeftClick,
    Moved,
}

/// Abstract mouse event in terminal coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputMouse {
    pub kind: MouseKind,
    pub column: u16,
    pub row: u16,
}

impl InputMouse {
    pub fn click(column: u16, row: u16) -> Self {
        Self {
            kind: MouseKind::LeftClick,
            column,
            row,
        }
    }

    pub fn moved(column: u16, row: u16) -> Self {
        Self {
            kind: MouseKind::Moved,
            column,
            row,
        }
    }
}
