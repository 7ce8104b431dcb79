//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    // ─────────────────────────────────────────────────────────────
    // AI Service Errors
    // ─────────────────────────────────────────────────────────────
    #[error("AI request failed: {message}")]
    AiRequest { message: String },

    #[error("AI response did not match the grid schema: {message}")]
    AiSchema { message: String },

    #[error("No API key found in environment variable {env_var}")]
    MissingCredential { env_var: String },

    // ─────────────────────────────────────────────────────────────
    // Grid Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Intensity {value} is outside 0..=100")]
    IntensityOutOfRange { value: i64 },

    #[error("Failed to export grid to {}: {message}", .path.display())]
    Export { path: PathBuf, message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    pub fn ai_request(message: impl Into<String>) -> Self {
        Self::AiRequest {
            message: message.into(),
        }
    }

    pub fn ai_schema(message: impl Into<String>) -> Self {
        Self::AiSchema {
            message: message.into(),
        }
    }

    pub fn missing_credential(env_var: impl Into<String>) -> Self {
        Self::MissingCredential {
            env_var: env_var.into(),
        }
    }

    pub fn export(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Export {
            path: path.into(),
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::ai_request("connection reset");
        assert_eq!(err.to_string(), "AI request failed: connection reset");

        let err = Error::missing_credential("GEMINI_API_KEY");
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_channel_send_error_message() {
        let err = Error::channel_send("receiver dropped");
        assert_eq!(err.to_string(), "Channel send error: receiver dropped");
    }

    #[test]
    fn test_intensity_error_message() {
        let err = Error::IntensityOutOfRange { value: 150 };
        assert_eq!(err.to_string(), "Intensity 150 is outside 0..=100");
    }

    #[test]
    fn test_export_error_mentions_path() {
        let err = Error::export("/tmp/out/grid.json", "permission denied");
        assert!(err.to_string().contains("/tmp/out/grid.json"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_context_preserves_error() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        ));
        let err = result.context("writing snapshot").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
