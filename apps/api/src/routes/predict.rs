//! The predict endpoint — validate, vectorize, classify, recommend.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::assessment::Assessment;
use crate::classifier::StressLevel;
use crate::errors::AppError;
use crate::recommend::fallback_message;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub stress_level: u8,
    pub ai_recommendations: String,
}

/// POST /predict
///
/// The body must carry all 20 integer survey fields; malformed bodies are
/// rejected by the `Json` extractor before this runs, so the classifier never
/// sees a partial vector. Classification failures are server errors; a failed
/// generation call degrades to fallback text and the request still succeeds.
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(assessment): Json<Assessment>,
) -> Result<Json<PredictResponse>, AppError> {
    let features = assessment.features();

    let class = state
        .model
        .predict(&features)
        .map_err(|e| AppError::Classification(e.to_string()))?;
    let level = StressLevel::from_class(class)
        .ok_or_else(|| AppError::Classification(format!("model produced unknown class {class}")))?;

    info!("assessment classified as {level} (class {class})");

    let ai_recommendations = match state.recommender.recommend(level, &assessment).await {
        Ok(text) => text,
        Err(e) => {
            warn!("recommendation generation failed, serving fallback: {e}");
            fallback_message(&e)
        }
    };

    Ok(Json(PredictResponse {
        stress_level: level.as_class(),
        ai_recommendations,
    }))
}
