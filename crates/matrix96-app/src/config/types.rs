//! Configuration types for Matrix96
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `AiSettings`, `ExportSettings`, `UiSettings` - Per-section settings

use std::path::PathBuf;

use matrix96_ai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use matrix96_core::PRESET_THEMES;
use serde::{Deserialize, Serialize};

/// Application settings (.matrix96/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ai: AiSettings,

    #[serde(default)]
    pub export: ExportSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Generative AI service settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AiSettings {
    /// Model name passed to the service
    #[serde(default = "default_model")]
    pub model: String,

    /// API root URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key (never the key itself)
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

/// Snapshot export settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Directory the snapshot file is written to
    #[serde(default = "default_export_dir")]
    pub directory: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: default_export_dir(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Quick-pick themes bound to keys 1-9
    #[serde(default = "default_themes")]
    pub themes: Vec<String>,

    /// Show `X=n` / `Y=n` labels around the grid
    #[serde(default = "default_true")]
    pub show_axis_labels: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            themes: default_themes(),
            show_axis_labels: true,
        }
    }
}

fn default_themes() -> Vec<String> {
    PRESET_THEMES.iter().map(|t| t.to_string()).collect()
}

fn default_true() -> bool {
    true
}
