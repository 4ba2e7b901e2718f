use std::sync::Arc;

use crate::classifier::StressModel;
use crate::recommend::RecommendationEngine;

/// Shared application state injected into route handlers via Axum extractors.
///
/// Everything here is built once at startup and read-only afterwards: the
/// model handle never mutates, so any number of concurrent requests share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<StressModel>,
    /// Pluggable recommendation engine. Production: `GeminiRecommender`;
    /// tests inject success/failure stubs.
    pub recommender: Arc<dyn RecommendationEngine>,
}
