//! # matrix96-core - Core Domain Types
//!
//! Foundation crate for Matrix96. Provides the grid model, error handling,
//! color helpers, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Grid Model (`grid`)
//! - [`Grid`] - The fixed [`ROWS`]x[`COLS`] matrix of cells
//! - [`Cell`] - One matrix entry: value, color, intensity
//! - [`CellPos`] - A checked (row, col) coordinate
//! - [`Intensity`] - Percentage newtype guaranteed to lie in 0..=100
//! - [`CellPatch`] - Partial update merged into a single cell
//!
//! ### Colors (`color`)
//! - [`Rgb`] - A parsed hex color
//! - [`parse_hex_color()`] - Parse `#rrggbb` / `#rgb`
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, one variant group per layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use matrix96_core::prelude::*;
//! ```

pub mod color;
pub mod error;
pub mod grid;
pub mod logging;

/// Prelude for common imports used throughout all Matrix96 crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use color::{parse_hex_color, Rgb};
pub use error::{Error, Result, ResultExt};
pub use grid::{
    Cell, CellPatch, CellPos, Grid, Intensity, ACTIVE_CELL_COLOR, COLS, DEFAULT_CELL_COLOR,
    DEFAULT_INTENSITY, EXPORT_FILENAME, PRESET_THEMES, ROWS,
};
