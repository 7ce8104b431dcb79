//! matrix96-ai - Generative AI gateway for Matrix96
//!
//! The AI service is an opaque request/response collaborator. This crate
//! defines the [`AiGateway`] trait the app layer talks to, the fixed prompt
//! and schema contract, validation of generated grids, and the Gemini
//! HTTP binding.
//!
//! Both operations are single-shot: no streaming, no retry, no caching. A
//! second call with the same input reaches the service again.

pub mod gemini;
pub mod prompt;
pub mod response;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

use matrix96_core::prelude::*;
use matrix96_core::Grid;

pub use gemini::{GeminiConfig, GeminiGateway, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use prompt::{
    analysis_prompt, generation_prompt, generation_schema, grid_summary,
    ANALYSIS_SYSTEM_INSTRUCTION,
};
pub use response::{parse_generated_grid, GeneratedGrid};

/// Request/response boundary to the generative AI service
///
/// Implement [`AiGateway`] (the `Send` variant); the local variant is derived.
#[trait_variant::make(AiGateway: Send)]
pub trait LocalAiGateway {
    /// Ask the service for a `ROWS`x`COLS` grid matching `theme`.
    ///
    /// Any transport failure or schema mismatch is an error; partial grids
    /// are never returned.
    async fn generate_grid(&self, theme: &str) -> Result<GeneratedGrid>;

    /// Ask the service for a short narrative about the grid's values.
    async fn analyze_grid(&self, grid: &Grid) -> Result<String>;
}
