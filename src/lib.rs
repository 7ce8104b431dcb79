//! Matrix96 - a terminal canvas for a 6x9 grid
//!
//! Cells are filled by hand or by a generative AI service. The interactive
//! editor lives in `matrix96-tui`; this crate adds the entry points and a
//! headless mode that prints NDJSON events.

pub mod app;
pub mod headless;

pub use app::{run, run_headless};
