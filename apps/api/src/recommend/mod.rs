//! Recommendation generator — turns a predicted stress level plus the raw
//! assessment into free-text advice via the generation API.
//!
//! Degrade-not-fail: the engine returns an explicit `Result`, and the predict
//! handler — not this module — substitutes [`fallback_message`] on `Err`. The
//! prediction is the load-bearing result; advice text is best-effort, so a
//! generation outage can never fail the request.

pub mod prompts;

use async_trait::async_trait;

use crate::assessment::Assessment;
use crate::classifier::StressLevel;
use crate::llm_client::{GeminiClient, LlmError};
use crate::recommend::prompts::RECOMMENDATION_PROMPT_TEMPLATE;

/// Marker prefix of every degraded response. Tests and clients key off it.
pub const FALLBACK_PREFIX: &str = "Could not generate AI recommendations at this time.";

/// Produces advice text for a scored assessment.
/// Object-safe so tests can inject success/failure engines into `AppState`.
#[async_trait]
pub trait RecommendationEngine: Send + Sync {
    async fn recommend(
        &self,
        level: StressLevel,
        assessment: &Assessment,
    ) -> Result<String, LlmError>;
}

/// Production engine: prompt construction plus one Gemini call.
pub struct GeminiRecommender {
    client: GeminiClient,
}

impl GeminiRecommender {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecommendationEngine for GeminiRecommender {
    async fn recommend(
        &self,
        level: StressLevel,
        assessment: &Assessment,
    ) -> Result<String, LlmError> {
        let prompt = build_prompt(level, assessment);
        self.client.generate(&prompt).await
    }
}

/// Renders the generation prompt: the predicted label, the formatting rules
/// and focus areas, and the full assessment embedded as JSON.
///
/// The assessment is serialized straight from the struct so field order and
/// values survive byte-for-byte (`serde_json::Value` would alphabetize).
pub fn build_prompt(level: StressLevel, assessment: &Assessment) -> String {
    let assessment_json = serde_json::to_string_pretty(assessment)
        .expect("Failed to serialize assessment");
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{stress_label}", level.as_str())
        .replace("{assessment_json}", &assessment_json)
}

/// Fixed-format degraded response: always non-empty, always carries the
/// error description.
pub fn fallback_message(err: &LlmError) -> String {
    format!("{FALLBACK_PREFIX} Error: {err}")
}
