/// Generation client — the single point of entry for all generative-language
/// API calls in StressLens.
///
/// ARCHITECTURAL RULE: no other module may call the Gemini API directly.
/// All generation traffic MUST go through this module.
///
/// Model: gemini-1.5-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all generation calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no generation API key configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("generation API returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the text of the first candidate's first text part.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single generation client used by the recommendation engine.
/// Wraps the Gemini `generateContent` endpoint with a bounded timeout.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
}

impl GeminiClient {
    /// `api_key: None` builds a client whose every call fails with
    /// `MissingApiKey` — startup proceeds and responses degrade instead.
    pub fn new(api_key: Option<String>, timeout: std::time::Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a single generation call. No retries, no backoff: the caller
    /// degrades to fallback text on failure, so a failed attempt is final.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(format!("{GEMINI_API_URL}/{MODEL}:generateContent"))
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the structured error message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.text().ok_or(LlmError::EmptyContent)?;

        debug!("generation call succeeded ({} chars)", text.len());

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{"candidates": [{"content": {"parts": [{"text": "• Take a walk"}], "role": "model"}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), Some("• Take a walk"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_response_skips_textless_parts() {
        let raw = r#"{"candidates": [{"content": {"parts": [{}, {"text": "advice"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), Some("advice"));
    }

    #[test]
    fn test_error_body_message_parse() {
        let raw = r#"{"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;
        let parsed: GeminiError = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.message, "Resource has been exhausted");
    }
}
