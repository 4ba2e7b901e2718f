pub mod health;
pub mod predict;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/predict", post(predict::handle_predict))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::assessment::{Assessment, FIELD_NAMES};
    use crate::classifier::{StressLevel, StressModel};
    use crate::llm_client::LlmError;
    use crate::recommend::{RecommendationEngine, FALLBACK_PREFIX};

    struct CannedEngine(&'static str);

    #[async_trait]
    impl RecommendationEngine for CannedEngine {
        async fn recommend(
            &self,
            _level: StressLevel,
            _assessment: &Assessment,
        ) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingEngine(&'static str);

    #[async_trait]
    impl RecommendationEngine for FailingEngine {
        async fn recommend(
            &self,
            _level: StressLevel,
            _assessment: &Assessment,
        ) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 504,
                message: self.0.to_string(),
            })
        }
    }

    // Single anxiety stump: anxiety_level <= 2.5 scores Low, above it High.
    fn test_router(engine: Arc<dyn RecommendationEngine>) -> Router {
        let raw = r#"{"version": 1, "n_features": 20, "n_classes": 3, "trees": [{"nodes": [
            {"feature": 0, "threshold": 2.5, "left": 1, "right": 2},
            {"leaf": 0},
            {"leaf": 2}
        ]}]}"#;
        let model: StressModel = serde_json::from_str(raw).unwrap();
        build_router(AppState {
            model: Arc::new(model),
            recommender: engine,
        })
    }

    /// All 20 fields set to 1 except `anxiety_level`.
    fn assessment_body(anxiety_level: i64) -> String {
        let pairs: Vec<String> = FIELD_NAMES
            .iter()
            .map(|name| {
                let value = if *name == "anxiety_level" { anxiety_level } else { 1 };
                format!("\"{name}\": {value}")
            })
            .collect();
        format!("{{{}}}", pairs.join(", "))
    }

    async fn post_predict(router: Router, body: String) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/predict")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_is_exactly_healthy() {
        // A broken generation backend must not affect liveness.
        let router = test_router(Arc::new(FailingEngine("generation is down")));
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn test_predict_end_to_end() {
        let router = test_router(Arc::new(CannedEngine("• Take regular breaks")));
        let (status, body) = post_predict(router, assessment_body(5)).await;
        assert_eq!(status, StatusCode::OK);

        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 2, "exactly stress_level and ai_recommendations");
        let stress_level = body["stress_level"].as_u64().unwrap();
        assert!(stress_level <= 2);
        assert_eq!(body["ai_recommendations"], "• Take regular breaks");
    }

    #[tokio::test]
    async fn test_predict_low_band() {
        let router = test_router(Arc::new(CannedEngine("• Keep it up")));
        let (status, body) = post_predict(router, assessment_body(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stress_level"], 0);
    }

    #[tokio::test]
    async fn test_predict_degrades_when_generation_times_out() {
        let router = test_router(Arc::new(FailingEngine("request timeout after 30 seconds")));
        let (status, body) = post_predict(router, assessment_body(5)).await;

        // Generation failure never fails the request.
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stress_level"], 2);
        let text = body["ai_recommendations"].as_str().unwrap();
        assert!(!text.is_empty());
        assert!(text.starts_with(FALLBACK_PREFIX));
        assert!(text.contains("timeout"));
    }

    #[tokio::test]
    async fn test_predict_missing_field_is_rejected() {
        let router = test_router(Arc::new(CannedEngine("unreachable")));
        let body = assessment_body(1).replacen("\"bullying\": 1", "\"extra\": 1", 1);
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/predict")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
