//! Grid controller - single writer for the grid, selection, and analysis
//!
//! AI operations are split into `begin_*` / `finish_*` halves so the TEA
//! update function stays synchronous: `begin_*` decides whether a request
//! is issued, the event loop runs it, and the result comes back as a
//! message routed to `finish_*`.
//!
//! Analysis requests carry the grid epoch they were started at. Reset and a
//! successful generation start a new epoch, and an analysis result from an
//! older epoch is dropped because it describes a grid that no longer exists.

use std::path::{Path, PathBuf};

use matrix96_ai::{AiGateway, GeneratedGrid};
use matrix96_core::prelude::*;
use matrix96_core::{Cell, CellPatch, CellPos, Grid, EXPORT_FILENAME};

/// Lifecycle of one kind of AI request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperationStatus {
    #[default]
    Idle,
    InFlight,
}

impl OperationStatus {
    pub fn is_in_flight(self) -> bool {
        self == OperationStatus::InFlight
    }
}

/// Owns the grid and everything derived from it
#[derive(Debug, Clone, Default)]
pub struct GridController {
    grid: Grid,
    selection: Option<CellPos>,
    hovered: Option<CellPos>,
    analysis: Option<String>,
    generation: OperationStatus,
    analysis_status: OperationStatus,
    epoch: u64,
}

impl GridController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> Option<CellPos> {
        self.selection
    }

    pub fn selected_cell(&self) -> Option<(CellPos, &Cell)> {
        self.selection.map(|pos| (pos, self.grid.get(pos)))
    }

    pub fn hovered(&self) -> Option<CellPos> {
        self.hovered
    }

    pub fn hovered_cell(&self) -> Option<(CellPos, &Cell)> {
        self.hovered.map(|pos| (pos, self.grid.get(pos)))
    }

    pub fn analysis(&self) -> Option<&str> {
        self.analysis.as_deref()
    }

    pub fn generation_status(&self) -> OperationStatus {
        self.generation
    }

    pub fn analysis_status(&self) -> OperationStatus {
        self.analysis_status
    }

    pub fn is_generating(&self) -> bool {
        self.generation.is_in_flight()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analysis_status.is_in_flight()
    }

    /// Bumped whenever the grid is replaced wholesale
    pub fn grid_epoch(&self) -> u64 {
        self.epoch
    }

    fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.analysis = None;
        self.epoch = self.epoch.wrapping_add(1);
    }

    // ─────────────────────────────────────────────────────────
    // Manual edits
    // ─────────────────────────────────────────────────────────

    /// Empty every cell and drop the selection and analysis.
    ///
    /// In-flight requests keep their status; a late generation result still
    /// lands on the fresh grid.
    pub fn reset(&mut self) {
        self.replace_grid(Grid::new());
        self.selection = None;
        debug!("Grid reset (epoch {})", self.epoch);
    }

    pub fn select(&mut self, pos: CellPos) {
        self.selection = Some(pos);
        self.hovered = Some(pos);
    }

    pub fn deselect(&mut self) {
        self.selection = None;
    }

    pub fn hover(&mut self, pos: CellPos) {
        self.hovered = Some(pos);
    }

    /// Merge `patch` into the cell at `pos`; no other cell changes.
    pub fn update_cell(&mut self, pos: CellPos, patch: CellPatch) {
        if patch.is_empty() {
            return;
        }
        self.grid.get_mut(pos).apply(patch);
        trace!("Cell {} updated", pos.cell_id());
    }

    // ─────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────

    /// Returns the trimmed theme to request, or `None` when nothing should be
    /// sent (blank theme, or a generation already in flight).
    pub fn begin_generation(&mut self, theme: &str) -> Option<String> {
        let theme = theme.trim();
        if theme.is_empty() {
            debug!("Ignoring blank theme");
            return None;
        }
        if self.generation.is_in_flight() {
            debug!("Generation already in flight, ignoring '{}'", theme);
            return None;
        }
        self.generation = OperationStatus::InFlight;
        info!("Generating grid for theme '{}'", theme);
        Some(theme.to_string())
    }

    /// Replace the whole grid with a generated one and clear the analysis
    pub fn apply_generation(&mut self, generated: GeneratedGrid) {
        self.generation = OperationStatus::Idle;
        let mut grid = generated.into_grid();
        grid.reassign_ids();
        self.replace_grid(grid);
        info!("Grid replaced ({} filled cells)", self.grid.filled_count());
    }

    /// Apply a generation result. Success replaces the whole grid and clears
    /// the analysis; failure leaves the grid untouched.
    pub fn finish_generation(&mut self, result: Result<GeneratedGrid>) -> Result<()> {
        match result {
            Ok(generated) => {
                self.apply_generation(generated);
                Ok(())
            }
            Err(e) => {
                self.fail_generation(&e.to_string());
                Err(e)
            }
        }
    }

    /// Record a failed generation; the grid is untouched
    pub fn fail_generation(&mut self, reason: &str) {
        self.generation = OperationStatus::Idle;
        warn!("Grid generation failed: {}", reason);
    }

    /// Run a full generation against `gateway`.
    ///
    /// Returns `Ok(false)` when no request was issued.
    pub async fn generate_from_theme<G>(&mut self, gateway: &G, theme: &str) -> Result<bool>
    where
        G: AiGateway + Sync,
    {
        let Some(theme) = self.begin_generation(theme) else {
            return Ok(false);
        };
        let result = gateway.generate_grid(&theme).await;
        self.finish_generation(result).map(|()| true)
    }

    // ─────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────

    /// Returns the grid snapshot to analyze, or `None` if an analysis is
    /// already in flight. Pair the result with [`Self::grid_epoch`].
    pub fn begin_analysis(&mut self) -> Option<Grid> {
        if self.analysis_status.is_in_flight() {
            debug!("Analysis already in flight");
            return None;
        }
        self.analysis_status = OperationStatus::InFlight;
        info!("Analyzing grid");
        Some(self.grid.clone())
    }

    /// Store analysis text produced for the grid at `epoch`.
    ///
    /// Returns `false`, keeping the current analysis, when the grid was
    /// replaced after the request started.
    pub fn apply_analysis(&mut self, epoch: u64, text: String) -> bool {
        self.analysis_status = OperationStatus::Idle;
        if epoch != self.epoch {
            debug!(
                "Dropping analysis for epoch {} (grid is at epoch {})",
                epoch, self.epoch
            );
            return false;
        }
        self.analysis = Some(text);
        true
    }

    /// Apply an analysis result for the grid at `epoch`. Failure keeps any
    /// prior analysis; a stale success is dropped.
    pub fn finish_analysis(&mut self, epoch: u64, result: Result<String>) -> Result<()> {
        match result {
            Ok(text) => {
                self.apply_analysis(epoch, text);
                Ok(())
            }
            Err(e) => {
                self.fail_analysis(&e.to_string());
                Err(e)
            }
        }
    }

    /// Record a failed analysis; any prior analysis is kept
    pub fn fail_analysis(&mut self, reason: &str) {
        self.analysis_status = OperationStatus::Idle;
        warn!("Grid analysis failed: {}", reason);
    }

    /// Run a full analysis against `gateway`.
    ///
    /// Returns `Ok(false)` when no request was issued.
    pub async fn analyze<G>(&mut self, gateway: &G) -> Result<bool>
    where
        G: AiGateway + Sync,
    {
        let Some(snapshot) = self.begin_analysis() else {
            return Ok(false);
        };
        let epoch = self.epoch;
        let result = gateway.analyze_grid(&snapshot).await;
        self.finish_analysis(epoch, result).map(|()| true)
    }

    // ─────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────

    /// Pretty-printed JSON array of rows of `{id, value, color, intensity}`
    pub fn export_snapshot(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(&self.grid).context("Failed to serialize grid")
    }

    /// Write the snapshot to `dir/grid_matrix_96.json`
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = export_path(dir);
        let bytes = self.export_snapshot()?;
        std::fs::write(&path, bytes).map_err(|e| Error::export(&path, e.to_string()))?;
        info!("Exported grid to {}", path.display());
        Ok(path)
    }
}

/// Where a snapshot exported into `dir` lands
pub fn export_path(dir: &Path) -> PathBuf {
    dir.join(EXPORT_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix96_ai::test_utils::{sample_generated_grid, ScriptedGateway};
    use matrix96_core::{Intensity, COLS, DEFAULT_CELL_COLOR, ROWS};
    use tempfile::tempdir;

    fn pos(row: usize, col: usize) -> CellPos {
        CellPos::new(row, col).unwrap()
    }

    #[test]
    fn test_new_controller_is_empty_and_idle() {
        let controller = GridController::new();
        assert_eq!(controller.grid().filled_count(), 0);
        assert!(controller.selection().is_none());
        assert!(controller.analysis().is_none());
        assert_eq!(controller.generation_status(), OperationStatus::Idle);
        assert_eq!(controller.analysis_status(), OperationStatus::Idle);
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_selection_and_analysis() {
        let mut controller = GridController::new();
        controller.update_cell(pos(1, 1), CellPatch::value("x").with_color("#ff0000"));
        controller.select(pos(1, 1));
        controller.begin_analysis();
        controller.finish_analysis(controller.grid_epoch(), Ok("busy".into())).unwrap();

        controller.reset();

        assert!(controller.selection().is_none());
        assert!(controller.analysis().is_none());
        for (p, cell) in controller.grid().cells() {
            assert_eq!(cell.value, "");
            assert_eq!(cell.color, DEFAULT_CELL_COLOR);
            assert_eq!(cell.intensity, Intensity::default());
            assert_eq!(cell.id, p.cell_id());
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut controller = GridController::new();
        controller.reset();
        let once = controller.grid().clone();
        controller.reset();
        assert_eq!(controller.grid(), &once);
    }

    #[test]
    fn test_reset_keeps_in_flight_status() {
        let mut controller = GridController::new();
        controller.begin_generation("Space");
        controller.reset();
        assert!(controller.is_generating());
    }

    #[test]
    fn test_update_cell_touches_only_that_cell() {
        let mut controller = GridController::new();
        let before = controller.grid().clone();

        controller.update_cell(pos(2, 3), CellPatch::value("Hi"));

        for (p, cell) in controller.grid().cells() {
            if p == pos(2, 3) {
                assert_eq!(cell.value, "Hi");
                assert_eq!(cell.color, DEFAULT_CELL_COLOR);
            } else {
                assert_eq!(cell, before.get(p));
            }
        }
    }

    #[test]
    fn test_update_cell_clamps_intensity() {
        let mut controller = GridController::new();
        controller.update_cell(pos(0, 0), CellPatch::intensity(250));
        controller.update_cell(pos(0, 1), CellPatch::intensity(-5));
        assert_eq!(controller.grid().get(pos(0, 0)).intensity.value(), 100);
        assert_eq!(controller.grid().get(pos(0, 1)).intensity.value(), 0);
    }

    #[test]
    fn test_update_cell_empty_color_falls_back() {
        let mut controller = GridController::new();
        controller.update_cell(pos(0, 0), CellPatch::color("#123456"));
        controller.update_cell(pos(0, 0), CellPatch::color(""));
        assert_eq!(controller.grid().get(pos(0, 0)).color, DEFAULT_CELL_COLOR);
    }

    #[test]
    fn test_update_cell_does_not_change_selection() {
        let mut controller = GridController::new();
        controller.select(pos(4, 4));
        controller.update_cell(pos(0, 0), CellPatch::value("a"));
        assert_eq!(controller.selection(), Some(pos(4, 4)));
    }

    #[test]
    fn test_select_and_deselect() {
        let mut controller = GridController::new();
        controller.select(pos(5, 8));
        assert_eq!(controller.selection(), Some(pos(5, 8)));
        assert_eq!(controller.selected_cell().unwrap().1.id, "5-8");

        controller.select(pos(0, 0));
        assert_eq!(controller.selection(), Some(pos(0, 0)));

        controller.deselect();
        assert!(controller.selection().is_none());
    }

    #[test]
    fn test_begin_generation_blank_theme_issues_nothing() {
        let mut controller = GridController::new();
        assert_eq!(controller.begin_generation("   "), None);
        assert_eq!(controller.begin_generation(""), None);
        assert!(!controller.is_generating());
    }

    #[test]
    fn test_begin_generation_trims_theme() {
        let mut controller = GridController::new();
        assert_eq!(
            controller.begin_generation("  Zen Garden \n").as_deref(),
            Some("Zen Garden")
        );
        assert!(controller.is_generating());
    }

    #[test]
    fn test_second_generation_while_in_flight_is_rejected() {
        let mut controller = GridController::new();
        assert!(controller.begin_generation("one").is_some());
        assert!(controller.begin_generation("two").is_none());
    }

    #[test]
    fn test_generation_and_analysis_may_overlap() {
        let mut controller = GridController::new();
        assert!(controller.begin_generation("one").is_some());
        assert!(controller.begin_analysis().is_some());
        assert!(controller.is_generating());
        assert!(controller.is_analyzing());

        controller.finish_analysis(controller.grid_epoch(), Ok("old grid".into())).unwrap();
        controller
            .finish_generation(Ok(sample_generated_grid("g")))
            .unwrap();

        assert!(!controller.is_generating());
        assert!(!controller.is_analyzing());
        // the analysis described the replaced grid
        assert!(controller.analysis().is_none());
    }

    #[test]
    fn test_analysis_finishing_after_generation_is_dropped() {
        let mut controller = GridController::new();
        controller.update_cell(pos(0, 0), CellPatch::value("A"));
        assert!(controller.begin_analysis().is_some());
        let epoch = controller.grid_epoch();
        assert!(controller.begin_generation("one").is_some());

        controller.apply_generation(sample_generated_grid("g"));
        assert!(!controller.apply_analysis(epoch, "story of A".into()));

        assert!(controller.analysis().is_none());
        assert!(!controller.is_analyzing());
        assert_eq!(controller.grid().get(pos(0, 0)).value, "g00");
    }

    #[test]
    fn test_analysis_finishing_after_reset_is_dropped() {
        let mut controller = GridController::new();
        controller.update_cell(pos(2, 2), CellPatch::value("x"));
        controller.begin_analysis();
        let epoch = controller.grid_epoch();

        controller.reset();
        controller
            .finish_analysis(epoch, Ok("describes x".into()))
            .unwrap();

        assert!(controller.analysis().is_none());
        assert!(!controller.is_analyzing());
    }

    #[test]
    fn test_failed_generation_keeps_epoch() {
        let mut controller = GridController::new();
        controller.begin_analysis();
        let epoch = controller.grid_epoch();
        controller.begin_generation("Broken");
        assert!(controller.finish_generation(Err(Error::ai_request("500"))).is_err());

        assert_eq!(controller.grid_epoch(), epoch);
        assert!(controller.apply_analysis(epoch, "still valid".into()));
        assert_eq!(controller.analysis(), Some("still valid"));
    }

    #[test]
    fn test_manual_edits_keep_epoch() {
        let mut controller = GridController::new();
        let epoch = controller.grid_epoch();
        controller.update_cell(pos(1, 1), CellPatch::value("y"));
        controller.select(pos(1, 1));
        assert_eq!(controller.grid_epoch(), epoch);
    }

    #[test]
    fn test_successful_generation_replaces_grid_and_clears_analysis() {
        let mut controller = GridController::new();
        controller.begin_analysis();
        controller.finish_analysis(controller.grid_epoch(), Ok("stale".into())).unwrap();
        controller.select(pos(1, 2));

        controller.begin_generation("Nebula");
        controller
            .finish_generation(Ok(sample_generated_grid("n")))
            .unwrap();

        let grid = controller.grid();
        for r in 0..ROWS {
            for c in 0..COLS {
                let cell = grid.get(pos(r, c));
                assert_eq!(cell.value, format!("n{r}{c}"));
                assert_eq!(cell.id, format!("{r}-{c}"));
            }
        }
        assert!(controller.analysis().is_none());
        assert_eq!(controller.generation_status(), OperationStatus::Idle);
    }

    #[test]
    fn test_failed_generation_leaves_grid_unchanged() {
        let mut controller = GridController::new();
        controller.update_cell(pos(0, 0), CellPatch::value("keep"));
        controller.begin_analysis();
        controller.finish_analysis(controller.grid_epoch(), Ok("kept".into())).unwrap();
        let before = controller.grid().clone();

        controller.begin_generation("Broken");
        let result = controller.finish_generation(Err(Error::ai_schema("expected 6 rows, got 5")));

        assert!(matches!(result, Err(Error::AiSchema { .. })));
        assert_eq!(controller.grid(), &before);
        assert_eq!(controller.analysis(), Some("kept"));
        assert_eq!(controller.generation_status(), OperationStatus::Idle);
    }

    #[test]
    fn test_failed_analysis_keeps_prior_analysis() {
        let mut controller = GridController::new();
        controller.begin_analysis();
        controller.finish_analysis(controller.grid_epoch(), Ok("first".into())).unwrap();

        controller.begin_analysis();
        assert!(controller
            .finish_analysis(controller.grid_epoch(), Err(Error::ai_request("timeout")))
            .is_err());

        assert_eq!(controller.analysis(), Some("first"));
        assert!(!controller.is_analyzing());
    }

    #[test]
    fn test_analysis_never_mutates_grid_or_selection() {
        let mut controller = GridController::new();
        controller.update_cell(pos(3, 3), CellPatch::value("v"));
        controller.select(pos(3, 3));
        let before = controller.grid().clone();

        let snapshot = controller.begin_analysis().unwrap();
        assert_eq!(snapshot, before);
        controller.finish_analysis(controller.grid_epoch(), Ok("text".into())).unwrap();

        assert_eq!(controller.grid(), &before);
        assert_eq!(controller.selection(), Some(pos(3, 3)));
    }

    #[test]
    fn test_second_analysis_while_in_flight_is_rejected() {
        let mut controller = GridController::new();
        assert!(controller.begin_analysis().is_some());
        assert!(controller.begin_analysis().is_none());
    }

    #[tokio::test]
    async fn test_generate_from_theme_with_gateway() {
        let gateway = ScriptedGateway::new();
        gateway.push_grid(Ok(sample_generated_grid("t")));
        let mut controller = GridController::new();

        assert!(controller.generate_from_theme(&gateway, " Mario ").await.unwrap());
        assert_eq!(gateway.last_theme().as_deref(), Some("Mario"));
        assert_eq!(controller.grid().get(pos(0, 0)).value, "t00");
    }

    #[tokio::test]
    async fn test_generate_from_blank_theme_skips_gateway() {
        let gateway = ScriptedGateway::new();
        let mut controller = GridController::new();

        assert!(!controller.generate_from_theme(&gateway, "  ").await.unwrap());
        assert_eq!(gateway.generate_calls(), 0);
    }

    #[tokio::test]
    async fn test_analyze_with_gateway() {
        let gateway = ScriptedGateway::new();
        gateway.push_analysis(Ok("A diagonal of warm colors.".into()));
        let mut controller = GridController::new();

        assert!(controller.analyze(&gateway).await.unwrap());
        assert_eq!(controller.analysis(), Some("A diagonal of warm colors."));
        assert_eq!(gateway.analyze_calls(), 1);
    }

    #[tokio::test]
    async fn test_repeated_generation_reaches_gateway_each_time() {
        let gateway = ScriptedGateway::new();
        gateway
            .push_grid(Ok(sample_generated_grid("a")))
            .push_grid(Ok(sample_generated_grid("b")));
        let mut controller = GridController::new();

        controller.generate_from_theme(&gateway, "Same").await.unwrap();
        controller.generate_from_theme(&gateway, "Same").await.unwrap();

        assert_eq!(gateway.generate_calls(), 2);
        assert_eq!(controller.grid().get(pos(0, 0)).value, "b00");
    }

    #[test]
    fn test_export_snapshot_shape() {
        let mut controller = GridController::new();
        controller.update_cell(pos(0, 1), CellPatch::value("x").with_intensity(40));

        let bytes = controller.export_snapshot().unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains('\n'), "snapshot should be pretty-printed");

        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), ROWS);
        assert!(rows.iter().all(|r| r.as_array().unwrap().len() == COLS));
        let cell = &rows[0][1];
        assert_eq!(cell["id"], "0-1");
        assert_eq!(cell["value"], "x");
        assert_eq!(cell["color"], DEFAULT_CELL_COLOR);
        assert_eq!(cell["intensity"], 40);
    }

    #[test]
    fn test_export_to_writes_file() {
        let temp = tempdir().unwrap();
        let mut controller = GridController::new();
        controller.update_cell(pos(5, 8), CellPatch::value("end"));

        let path = controller.export_to(temp.path()).unwrap();
        assert_eq!(path, temp.path().join("grid_matrix_96.json"));

        let written: Grid = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(&written, controller.grid());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp = tempdir().unwrap();
        let controller = GridController::new();
        let result = controller.export_to(&temp.path().join("nope"));
        assert!(matches!(result, Err(Error::Export { .. })));
    }
}
