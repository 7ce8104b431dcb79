//! Settings loader for .matrix96/config.toml

use std::path::{Path, PathBuf};

use matrix96_ai::GeminiConfig;
use matrix96_core::prelude::*;

use super::types::{AiSettings, Settings};

const CONFIG_FILENAME: &str = "config.toml";
const MATRIX96_DIR: &str = ".matrix96";

/// Environment variable checked when the configured one is unset
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Load settings for a working directory
///
/// Looks for `<work_dir>/.matrix96/config.toml`, then
/// `<config_dir>/matrix96/config.toml`. Missing or broken files fall back to
/// defaults; a broken file is logged, never fatal.
pub fn load_settings(work_dir: &Path) -> Settings {
    let mut candidates = vec![local_config_path(work_dir)];
    if let Some(global) = global_config_path() {
        candidates.push(global);
    }
    settings_from_candidates(&candidates)
}

/// First existing candidate wins
fn settings_from_candidates(candidates: &[PathBuf]) -> Settings {
    let Some(config_path) = candidates.iter().find(|p| p.exists()) else {
        debug!("No config file in {:?}, using defaults", candidates);
        return Settings::default();
    };

    match load_settings_file(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}", e);
            Settings::default()
        }
    }
}

/// Load one settings file, reporting read or parse failures
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {:?}: {}", path, e)))?;
    toml::from_str(&content).map_err(|e| Error::config(format!("Failed to parse {:?}: {}", path, e)))
}

pub fn local_config_path(work_dir: &Path) -> PathBuf {
    work_dir.join(MATRIX96_DIR).join(CONFIG_FILENAME)
}

pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("matrix96").join(CONFIG_FILENAME))
}

/// Create `.matrix96/config.toml` with commented defaults (idempotent)
pub fn init_config_dir(work_dir: &Path) -> Result<PathBuf> {
    let dir = work_dir.join(MATRIX96_DIR);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .matrix96 dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Matrix96 Configuration

[ai]
# Model used for grid generation and analysis
model = "gemini-3-flash-preview"
base_url = "https://generativelanguage.googleapis.com/v1beta"
# Name of the environment variable holding the API key
api_key_env = "GEMINI_API_KEY"

[export]
# Where grid_matrix_96.json is written
directory = "."

[ui]
show_axis_labels = true
# themes = ["Cyberpunk Neon", "Zen Garden"]
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {:?}", config_path);
    }

    Ok(config_path)
}

/// Look up the API key: the configured variable first, then `API_KEY`
pub fn resolve_api_key(ai: &AiSettings, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup(&ai.api_key_env)
        .or_else(|| lookup(FALLBACK_API_KEY_ENV))
        .filter(|k| !k.trim().is_empty())
}

/// Build the gateway config from settings and the process environment
pub fn gemini_config(ai: &AiSettings) -> GeminiConfig {
    let api_key = resolve_api_key(ai, |name| std::env::var(name).ok());
    if api_key.is_none() {
        warn!(
            "No API key in ${} or ${}; AI requests will fail",
            ai.api_key_env, FALLBACK_API_KEY_ENV
        );
    }
    GeminiConfig {
        base_url: ai.base_url.clone(),
        model: ai.model.clone(),
        api_key,
        api_key_env: ai.api_key_env.clone(),
    }
}
