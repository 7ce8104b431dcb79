//! Test doubles for [`AiGateway`]
//!
//! Available to other crates with the `test-helpers` feature.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use matrix96_core::prelude::*;
use matrix96_core::{Cell, Grid, Intensity};

use crate::{AiGateway, GeneratedGrid};

/// Gateway that replays queued results in order
///
/// An empty queue answers with an `AiRequest` error, so a test that forgets
/// to script a call fails loudly instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    grids: Mutex<VecDeque<Result<GeneratedGrid>>>,
    analyses: Mutex<VecDeque<Result<String>>>,
    generate_calls: AtomicUsize,
    analyze_calls: AtomicUsize,
    last_theme: Mutex<Option<String>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_grid(&self, result: Result<GeneratedGrid>) -> &Self {
        if let Ok(mut grids) = self.grids.lock() {
            grids.push_back(result);
        }
        self
    }

    pub fn push_analysis(&self, result: Result<String>) -> &Self {
        if let Ok(mut analyses) = self.analyses.lock() {
            analyses.push_back(result);
        }
        self
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn analyze_calls(&self) -> usize {
        self.analyze_calls.load(Ordering::SeqCst)
    }

    pub fn last_theme(&self) -> Option<String> {
        self.last_theme.lock().ok().and_then(|t| t.clone())
    }
}

impl AiGateway for ScriptedGateway {
    async fn generate_grid(&self, theme: &str) -> Result<GeneratedGrid> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_theme.lock() {
            *last = Some(theme.to_string());
        }
        let next = self.grids.lock().ok().and_then(|mut g| g.pop_front());
        next.unwrap_or_else(|| Err(Error::ai_request("no scripted grid")))
    }

    async fn analyze_grid(&self, _grid: &Grid) -> Result<String> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.analyses.lock().ok().and_then(|mut a| a.pop_front());
        next.unwrap_or_else(|| Err(Error::ai_request("no scripted analysis")))
    }
}

/// A fully populated grid whose values are `"{tag}{row}{col}"`
pub fn sample_generated_grid(tag: &str) -> GeneratedGrid {
    GeneratedGrid::from_grid(Grid::from_fn(|pos| {
        Cell::new(
            pos,
            format!("{tag}{}{}", pos.row(), pos.col()),
            "#ff8800",
            Intensity::clamped(((pos.row() * 10 + pos.col()) % 101) as i64),
        )
    }))
}
