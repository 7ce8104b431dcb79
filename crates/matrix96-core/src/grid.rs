//! Grid domain model
//!
//! The grid is a fixed `ROWS`x`COLS` matrix. Dimensions are part of the type
//! (`[[Cell; COLS]; ROWS]`), so a grid can never be resized or ragged.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of rows (Y axis)
pub const ROWS: usize = 6;

/// Number of columns (X axis)
pub const COLS: usize = 9;

/// Neutral slate used for empty cells
pub const DEFAULT_CELL_COLOR: &str = "#334155";

/// Highlight color for the selected cell
pub const ACTIVE_CELL_COLOR: &str = "#3b82f6";

/// Intensity given to fresh cells
pub const DEFAULT_INTENSITY: u8 = 100;

/// Suggested filename for grid exports
pub const EXPORT_FILENAME: &str = "grid_matrix_96.json";

/// Quick-pick themes offered next to the theme input
pub const PRESET_THEMES: [&str; 6] = [
    "Cyberpunk Neon",
    "Periodic Table Mini",
    "Pixel Art Mario",
    "Zen Garden",
    "Space Nebula",
    "Productivity Planner",
];

// ─────────────────────────────────────────────────────────────────────────────
// Intensity
// ─────────────────────────────────────────────────────────────────────────────

/// Cell intensity percentage, always within `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: Intensity = Intensity(0);
    pub const MAX: Intensity = Intensity(100);

    /// Clamp any integer into range
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Round and clamp a fractional percentage (AI responses use JSON numbers)
    pub fn from_f64_lossy(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Display opacity: monotonic in intensity with a 0.2 floor, capped at 1.0
    pub fn opacity(self) -> f32 {
        (f32::from(self.0) / 100.0 + 0.2).min(1.0)
    }

    /// Step by a signed delta, clamping at the bounds
    pub fn saturating_add(self, delta: i64) -> Self {
        Self::clamped(i64::from(self.0) + delta)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(DEFAULT_INTENSITY)
    }
}

impl TryFrom<i64> for Intensity {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(Error::IntensityOutOfRange { value })
        }
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CellPos
// ─────────────────────────────────────────────────────────────────────────────

/// A (row, col) coordinate that is always inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellPos {
    row: usize,
    col: usize,
}

impl CellPos {
    /// Checked constructor; `None` when outside `ROWS`x`COLS`
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLS).then_some(Self { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Move by a signed offset, stopping at the grid edges
    pub fn offset(self, d_row: isize, d_col: isize) -> Self {
        let row = self.row.saturating_add_signed(d_row).min(ROWS - 1);
        let col = self.col.saturating_add_signed(d_col).min(COLS - 1);
        Self { row, col }
    }

    /// 1-based `"col,row"` label (X first, matching the axis labels)
    pub fn label(self) -> String {
        format!("{},{}", self.col + 1, self.row + 1)
    }

    /// Stable cell id derived from the position
    pub fn cell_id(self) -> String {
        format!("{}-{}", self.row, self.col)
    }

    /// All positions in row-major order
    pub fn all() -> impl Iterator<Item = CellPos> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| CellPos { row, col }))
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.col + 1, self.row + 1)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cell
// ─────────────────────────────────────────────────────────────────────────────

/// One matrix entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: String,
    pub value: String,
    pub color: String,
    pub intensity: Intensity,
}

impl Cell {
    /// Empty cell at `pos`: no value, default color, full intensity
    pub fn empty(pos: CellPos) -> Self {
        Self {
            id: pos.cell_id(),
            value: String::new(),
            color: DEFAULT_CELL_COLOR.to_string(),
            intensity: Intensity::default(),
        }
    }

    /// Build a cell at `pos`, substituting the default color for an empty one
    pub fn new(
        pos: CellPos,
        value: impl Into<String>,
        color: impl Into<String>,
        intensity: Intensity,
    ) -> Self {
        Self {
            id: pos.cell_id(),
            value: value.into(),
            color: normalize_color(color.into()),
            intensity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Merge a partial update into this cell
    pub fn apply(&mut self, patch: CellPatch) {
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(color) = patch.color {
            self.color = normalize_color(color);
        }
        if let Some(intensity) = patch.intensity {
            self.intensity = Intensity::clamped(intensity);
        }
    }
}

fn normalize_color(color: String) -> String {
    if color.trim().is_empty() {
        DEFAULT_CELL_COLOR.to_string()
    } else {
        color.trim().to_string()
    }
}

/// Partial cell update; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellPatch {
    pub value: Option<String>,
    pub color: Option<String>,
    /// Raw intensity; clamped into `0..=100` when applied
    pub intensity: Option<i64>,
}

impl CellPatch {
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn intensity(intensity: i64) -> Self {
        Self {
            intensity: Some(intensity),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_intensity(mut self, intensity: i64) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.color.is_none() && self.intensity.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Grid
// ─────────────────────────────────────────────────────────────────────────────

/// The fixed `ROWS`x`COLS` matrix
///
/// Serializes as an array of rows of `{id, value, color, intensity}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: [[Cell; COLS]; ROWS],
}

impl Grid {
    /// A grid of empty default cells
    pub fn new() -> Self {
        Self::from_fn(Cell::empty)
    }

    /// Build every cell from its position, row-major
    pub fn from_fn(mut f: impl FnMut(CellPos) -> Cell) -> Self {
        let rows = std::array::from_fn(|row| {
            std::array::from_fn(|col| f(CellPos { row, col }))
        });
        Self { rows }
    }

    pub fn get(&self, pos: CellPos) -> &Cell {
        &self.rows[pos.row][pos.col]
    }

    pub fn get_mut(&mut self, pos: CellPos) -> &mut Cell {
        &mut self.rows[pos.row][pos.col]
    }

    /// Rows in order, each a `COLS`-long slice
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.rows.iter()
    }

    /// Every cell with its position, row-major
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, &Cell)> {
        CellPos::all().map(move |pos| (pos, self.get(pos)))
    }

    /// Number of cells with a non-empty value
    pub fn filled_count(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }

    /// Ids are derived from position; a deserialized grid may carry stale ones
    pub fn reassign_ids(&mut self) {
        for pos in CellPos::all() {
            self.get_mut(pos).id = pos.cell_id();
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<CellPos> for Grid {
    type Output = Cell;

    fn index(&self, pos: CellPos) -> &Self::Output {
        self.get(pos)
    }
}

impl IndexMut<CellPos> for Grid {
    fn index_mut(&mut self, pos: CellPos) -> &mut Self::Output {
        self.get_mut(pos)
    }
}
