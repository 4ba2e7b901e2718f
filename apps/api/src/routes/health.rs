use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness check only — must not touch the model or the generation service.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
