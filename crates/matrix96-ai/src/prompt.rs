//! Fixed prompt templates and the requested response schema

use matrix96_core::{Grid, COLS, ROWS};
use serde_json::{json, Value};

/// System instruction sent with every analysis request
pub const ANALYSIS_SYSTEM_INSTRUCTION: &str =
    "You are a data visualizer and pattern recognizer. Keep it concise but insightful.";

/// Prompt asking for a themed grid of the fixed dimensions
pub fn generation_prompt(theme: &str) -> String {
    format!(
        "Fill a {ROWS}x{COLS} grid ({ROWS} rows, {COLS} columns) based on the theme: \"{theme}\".\n\
         Provide a text value, a hexadecimal color, and an intensity from 0 to 100 for each cell.\n\
         Be creative! If the theme is \"Periodic Table\", use elements. \
         If it is \"Pixel Art\", use color blocks."
    )
}

/// Response schema: `{ grid: [[{value, color, intensity}; COLS]; ROWS] }`
pub fn generation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "grid": {
                "type": "ARRAY",
                "description": format!("An array of {ROWS} rows"),
                "items": {
                    "type": "ARRAY",
                    "description": format!("An array of {COLS} cells"),
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "value": { "type": "STRING" },
                            "color": { "type": "STRING", "description": "Hex color code" },
                            "intensity": { "type": "NUMBER", "description": "Scale 0-100" }
                        },
                        "required": ["value", "color", "intensity"]
                    }
                }
            }
        },
        "required": ["grid"]
    })
}

/// Flatten cell values row-major: `", "` within a row, `" | "` between rows
pub fn grid_summary(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| cell.value.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Prompt asking for the story or pattern behind a grid summary
pub fn analysis_prompt(summary: &str) -> String {
    format!(
        "Analyze this {ROWS}x{COLS} grid content and tell me what story or pattern it represents: {summary}"
    )
}
