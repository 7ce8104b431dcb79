//! Application entry points shared by the binary

use std::sync::Arc;

use matrix96_ai::{GeminiConfig, GeminiGateway};
use matrix96_app::config::{gemini_config, Settings};
use matrix96_core::logging::{self, SessionInfo};
use matrix96_core::prelude::*;

use crate::headless::{self, HeadlessOptions};

/// Start file logging and build the gateway the session will use
fn init(settings: &Settings, mode: &str) -> Result<Arc<GeminiGateway>> {
    let config: GeminiConfig = gemini_config(&settings.ai);
    // Log to file, since the TUI owns stdout
    logging::init(&SessionInfo {
        mode,
        model: &config.model,
        endpoint: &config.base_url,
        export_dir: &settings.export.directory,
    })?;
    Ok(Arc::new(GeminiGateway::new(config)))
}

/// Run the interactive editor
pub async fn run(settings: Settings) -> Result<()> {
    let gateway = init(&settings, "tui")?;
    let result = matrix96_tui::run(settings, gateway).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

/// Run without a terminal; returns the number of failed steps
pub async fn run_headless(settings: Settings, options: HeadlessOptions) -> Result<usize> {
    let gateway = init(&settings, "headless")?;
    let mut stdout = std::io::stdout();
    let result = headless::runner::run(gateway.as_ref(), &options, &mut stdout).await;

    if let Err(ref e) = result {
        error!("Headless error: {:?}", e);
    }
    info!("Matrix96 headless mode exiting");
    result
}
