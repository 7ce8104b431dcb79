//! Google Generative AI (Gemini) binding for [`AiGateway`]
//!
//! Uses the plain `generateContent` REST endpoint: one POST per call, no
//! streaming. Generation requests ask for `application/json` output with the
//! grid schema attached; analysis requests carry a system instruction.

use matrix96_core::prelude::*;
use matrix96_core::Grid;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::prompt::{
    analysis_prompt, generation_prompt, generation_schema, grid_summary,
    ANALYSIS_SYSTEM_INSTRUCTION,
};
use crate::response::{parse_generated_grid, GeneratedGrid};
use crate::AiGateway;

/// Google Generative AI API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when the config does not name one.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Configuration for the Gemini gateway.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API root, without a trailing slash (overridable for tests and proxies).
    pub base_url: String,
    /// Model to use (e.g., "gemini-3-flash-preview").
    pub model: String,
    /// Credential; `None` makes every request fail with `MissingCredential`.
    pub api_key: Option<String>,
    /// Name of the environment variable the key was read from, for errors.
    pub api_key_env: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Google error response format.
#[derive(Debug, Deserialize)]
struct GoogleError {
    code: Option<u16>,
    message: String,
    status: Option<String>,
}

/// Google error wrapper.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: GoogleError,
}

/// `generateContent` response (only the fields we read).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Gemini-backed [`AiGateway`].
#[derive(Debug, Clone)]
pub struct GeminiGateway {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a gateway with a custom HTTP client.
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn headers(&self) -> Result<HeaderMap> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::missing_credential(&self.config.api_key_env))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(key)
                .map_err(|_| Error::config("API key contains invalid header characters"))?,
        );
        Ok(headers)
    }

    /// POST a request body and return the concatenated candidate text.
    async fn generate_content(&self, body: &Value) -> Result<String> {
        let headers = self.headers()?;
        let url = self.endpoint();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::ai_request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::ai_request(e.to_string()))?;

        if !status.is_success() {
            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&text) {
                let err = error_response.error;
                return Err(Error::ai_request(format!(
                    "{} {}: {}",
                    err.code.unwrap_or(status.as_u16()),
                    err.status.unwrap_or_default(),
                    err.message
                )));
            }
            return Err(Error::ai_request(format!("HTTP {}: {}", status.as_u16(), text)));
        }

        extract_text(&text)
    }
}

/// Pull the text out of a `generateContent` response body.
fn extract_text(body: &str) -> Result<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| Error::ai_request(format!("malformed service response: {e}")))?;

    if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(Error::ai_request(format!("prompt blocked: {reason}")));
    }

    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::ai_request("service returned no candidates"))?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(Error::ai_request(
            "response blocked due to safety concerns",
        ));
    }

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(Error::ai_request("service returned an empty response"));
    }
    Ok(text)
}

impl AiGateway for GeminiGateway {
    async fn generate_grid(&self, theme: &str) -> Result<GeneratedGrid> {
        info!("Requesting grid for theme {:?} from {}", theme, self.config.model);
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": generation_prompt(theme) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": generation_schema()
            }
        });

        let text = self.generate_content(&body).await?;
        parse_generated_grid(&text)
    }

    async fn analyze_grid(&self, grid: &Grid) -> Result<String> {
        let summary = grid_summary(grid);
        info!("Requesting analysis from {}", self.config.model);
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": analysis_prompt(&summary) }] }],
            "systemInstruction": { "parts": [{ "text": ANALYSIS_SYSTEM_INSTRUCTION }] }
        });

        self.generate_content(&body).await
    }
}
