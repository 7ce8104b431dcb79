//! Headless mode runner - drives the controller without a terminal

use std::io::Write;

use matrix96_ai::AiGateway;
use matrix96_app::GridController;
use matrix96_core::prelude::*;

use super::{HeadlessEvent, HeadlessOptions};

/// Generate, analyze and export as requested, emitting one event per step.
///
/// A failed step emits an `error` event and the run continues. Returns the
/// number of failed steps.
pub async fn run<G, W>(gateway: &G, options: &HeadlessOptions, out: &mut W) -> Result<usize>
where
    G: AiGateway + Sync,
    W: Write,
{
    if options.is_empty() {
        return Err(Error::config(
            "headless mode needs --theme, --analyze or --export",
        ));
    }

    let mut controller = GridController::new();
    let mut failures = 0;

    if let Some(theme) = &options.theme {
        match controller.generate_from_theme(gateway, theme).await {
            Ok(true) => HeadlessEvent::generated(theme.trim(), controller.grid()).emit(out),
            Ok(false) => {
                failures += 1;
                HeadlessEvent::error("generate", "Theme is blank").emit(out);
            }
            Err(e) => {
                failures += 1;
                HeadlessEvent::error("generate", e.to_string()).emit(out);
            }
        }
    }

    if options.analyze {
        match controller.analyze(gateway).await {
            Ok(_) => {
                if let Some(text) = controller.analysis() {
                    HeadlessEvent::analysis(text).emit(out);
                }
            }
            Err(e) => {
                failures += 1;
                HeadlessEvent::error("analyze", e.to_string()).emit(out);
            }
        }
    }

    if let Some(dir) = &options.export_dir {
        match controller.export_to(dir) {
            Ok(path) => HeadlessEvent::exported(path).emit(out),
            Err(e) => {
                failures += 1;
                HeadlessEvent::error("export", e.to_string()).emit(out);
            }
        }
    }

    if failures > 0 {
        warn!("Headless run finished with {} failed step(s)", failures);
    }
    Ok(failures)
}
