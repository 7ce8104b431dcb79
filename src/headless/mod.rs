//! Headless mode - NDJSON event output without a terminal
//!
//! Runs the grid controller directly against the AI gateway and prints one
//! JSON object per line to stdout, each tagged with an `event` field.
//!
//! # Example Output
//!
//! ```json
//! {"event":"generated","theme":"Zen Garden","filled":54,"grid":[...],"timestamp":1704700001000}
//! {"event":"analysis","text":"Calm greens...","timestamp":1704700002000}
//! {"event":"exported","path":"./grid_matrix_96.json","timestamp":1704700002010}
//! ```

pub mod runner;

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use matrix96_core::Grid;

/// What a headless run should do, in order: generate, analyze, export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessOptions {
    pub theme: Option<String>,
    pub analyze: bool,
    pub export_dir: Option<PathBuf>,
}

impl HeadlessOptions {
    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && !self.analyze && self.export_dir.is_none()
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A grid was generated for a theme
    Generated {
        theme: String,
        filled: usize,
        grid: Grid,
        timestamp: i64,
    },

    /// Analysis text for the current grid
    Analysis { text: String, timestamp: i64 },

    /// Grid written to disk
    Exported { path: PathBuf, timestamp: i64 },

    /// A step failed
    Error {
        step: String,
        message: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Write to `out`, logging rather than failing
    pub fn emit<W: Write>(&self, out: &mut W) {
        if let Err(e) = self.write_to(out) {
            error!("Failed to write headless event: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn generated(theme: &str, grid: &Grid) -> Self {
        Self::Generated {
            theme: theme.to_string(),
            filled: grid.filled_count(),
            grid: grid.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn analysis(text: &str) -> Self {
        Self::Analysis {
            text: text.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn exported(path: PathBuf) -> Self {
        Self::Exported {
            path,
            timestamp: Self::now(),
        }
    }

    pub fn error(step: &str, message: impl Into<String>) -> Self {
        Self::Error {
            step: step.to_string(),
            message: message.into(),
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(event: &HeadlessEvent) -> serde_json::Value {
        let mut out = Vec::new();
        event.write_to(&mut out).unwrap();
        assert_eq!(out.last(), Some(&b'\n'));
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_event_tag_is_snake_case() {
        let value = line(&HeadlessEvent::analysis("calm"));
        assert_eq!(value["event"], "analysis");
        assert_eq!(value["text"], "calm");
        assert!(value["timestamp"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_generated_event_carries_grid_rows() {
        let grid = Grid::new();
        let value = line(&HeadlessEvent::generated("Zen Garden", &grid));
        assert_eq!(value["event"], "generated");
        assert_eq!(value["filled"], 0);
        assert_eq!(value["grid"].as_array().unwrap().len(), 6);
        assert_eq!(value["grid"][0].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_error_event() {
        let value = line(&HeadlessEvent::error("generate", "AI request failed: 500"));
        assert_eq!(value["event"], "error");
        assert_eq!(value["step"], "generate");
        assert_eq!(value["message"], "AI request failed: 500");
    }

    #[test]
    fn test_options_empty() {
        assert!(HeadlessOptions::default().is_empty());
        let options = HeadlessOptions {
            analyze: true,
            ..Default::default()
        };
        assert!(!options.is_empty());
    }
}
