//! Configuration file parsing for Matrix96
//!
//! Supports:
//! - `.matrix96/config.toml` - Per-directory settings
//! - `<config_dir>/matrix96/config.toml` - User-wide settings

pub mod settings;
pub mod types;

pub use settings::{
    gemini_config, global_config_path, init_config_dir, load_settings, load_settings_file,
    local_config_path, resolve_api_key, FALLBACK_API_KEY_ENV,
};
pub use types::*;
