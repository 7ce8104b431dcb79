//! Validation of AI-generated grids
//!
//! The service is asked for a fixed shape, but its output is untrusted. A
//! response is accepted only when it parses and has exactly `ROWS` rows of
//! exactly `COLS` cells; anything else is [`Error::AiSchema`].

use matrix96_core::prelude::*;
use matrix96_core::{Cell, Grid, Intensity, COLS, ROWS};
use serde::Deserialize;

/// A validated `ROWS`x`COLS` grid from the service
///
/// Only constructed by [`parse_generated_grid`] (or wrapping an existing
/// [`Grid`]), so holding one means the shape check has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGrid {
    grid: Grid,
}

impl GeneratedGrid {
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

#[derive(Debug, Deserialize)]
struct GeneratedCell {
    value: String,
    color: String,
    intensity: f64,
}

/// The service may return the schema's `{ "grid": [...] }` envelope or the bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawResponse {
    Envelope { grid: Vec<Vec<GeneratedCell>> },
    Bare(Vec<Vec<GeneratedCell>>),
}

/// Parse and validate the JSON text of a generation response
///
/// Cells keep the row/column order the service returned. Fractional
/// intensities are rounded and clamped; empty colors become the default.
pub fn parse_generated_grid(text: &str) -> Result<GeneratedGrid> {
    let raw: RawResponse = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| Error::ai_schema(format!("unparseable grid JSON: {e}")))?;

    let mut rows = match raw {
        RawResponse::Envelope { grid } => grid,
        RawResponse::Bare(grid) => grid,
    };

    if rows.len() != ROWS {
        return Err(Error::ai_schema(format!(
            "expected {ROWS} rows, got {}",
            rows.len()
        )));
    }
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != COLS) {
        return Err(Error::ai_schema(format!(
            "expected {COLS} cells in row {index}, got {}",
            row.len()
        )));
    }

    let grid = Grid::from_fn(|pos| {
        let raw = &mut rows[pos.row()][pos.col()];
        Cell::new(
            pos,
            std::mem::take(&mut raw.value),
            std::mem::take(&mut raw.color),
            Intensity::from_f64_lossy(raw.intensity),
        )
    });

    Ok(GeneratedGrid { grid })
}

/// Models occasionally wrap JSON in a markdown fence despite the mime type
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}
