//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "MATRIX96_LOG";

/// Filter used when `MATRIX96_LOG` is unset or unparseable
pub const DEFAULT_FILTER: &str =
    "matrix96=info,matrix96_core=info,matrix96_ai=info,matrix96_app=info,matrix96_tui=info,warn";

/// How this session was started, written once under the startup banner
#[derive(Debug, Clone)]
pub struct SessionInfo<'a> {
    /// `"tui"` or `"headless"`
    pub mode: &'a str,
    pub model: &'a str,
    pub endpoint: &'a str,
    pub export_dir: &'a Path,
}

impl SessionInfo<'_> {
    /// Banner body lines, in the order they are logged
    pub fn banner_lines(&self) -> Vec<String> {
        vec![
            format!("Matrix96 starting ({} mode)", self.mode),
            format!("AI model: {} at {}", self.model, self.endpoint),
            format!("Exports: {}", self.export_dir.display()),
        ]
    }
}

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/matrix96/logs/` so they never
/// interleave with the terminal UI. Log level is controlled by the
/// `MATRIX96_LOG` environment variable.
///
/// # Examples
/// ```bash
/// MATRIX96_LOG=debug cargo run
/// MATRIX96_LOG=matrix96_ai=trace cargo run
/// ```
pub fn init(session: &SessionInfo<'_>) -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "matrix96.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    for line in session.banner_lines() {
        tracing::info!("{}", line);
    }
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("matrix96").join("logs"))
}

/// Base path of the log file; the daily appender adds a date suffix
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("matrix96.log"))
}
