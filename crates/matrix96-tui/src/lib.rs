//! matrix96-tui - Terminal UI for Matrix96
//!
//! Creates an [`Engine`](matrix96_app::Engine) and adds terminal rendering,
//! event polling, and the grid widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
