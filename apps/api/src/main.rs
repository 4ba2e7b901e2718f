mod assessment;
mod classifier;
mod config;
mod errors;
mod llm_client;
mod recommend;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::classifier::StressModel;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::recommend::GeminiRecommender;
use crate::routes::build_router;
use crate::state::AppState;

/// Origins always allowed, for local frontend development.
const DEV_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://localhost:3000",
    "http://127.0.0.1:5173",
];

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "stresslens_api={},tower_http={}",
                &config.rust_log, &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting StressLens API v{}", env!("CARGO_PKG_VERSION"));

    // Load the classifier artifact. Fatal on failure: there is no recovery
    // path, and no request can succeed without the model.
    let model = StressModel::load(&config.model_path).with_context(|| {
        format!(
            "failed to load classifier artifact from '{}'",
            config.model_path
        )
    })?;
    info!(
        "Classifier artifact loaded from {} ({} trees)",
        config.model_path,
        model.n_trees()
    );

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set — recommendations will degrade to fallback text");
    }

    // Initialize generation client
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    );
    info!("Generation client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        model: Arc::new(model),
        recommender: Arc::new(GeminiRecommender::new(llm)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fixed development origins plus the optional deployed frontend; all methods
/// and headers are allowed for those origins.
fn build_cors_layer(config: &Config) -> Result<CorsLayer> {
    let mut origins: Vec<HeaderValue> = DEV_ORIGINS
        .iter()
        .map(|o| HeaderValue::from_static(o))
        .collect();
    if let Some(url) = &config.frontend_url {
        let origin = url
            .parse::<HeaderValue>()
            .with_context(|| format!("FRONTEND_URL '{url}' is not a valid origin"))?;
        origins.push(origin);
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
