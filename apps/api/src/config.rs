use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Only the numeric variables can fail to parse; everything else is optional
/// or defaulted. Notably the generation API key is NOT required at startup —
/// a missing key is logged as a warning and the first generation call fails
/// and degrades instead.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key for the hosted generation API. `None` means every generation call
    /// returns an error and the predict handler substitutes the fallback text.
    pub gemini_api_key: Option<String>,
    /// Extra allowed CORS origin for a deployed frontend.
    pub frontend_url: Option<String>,
    /// Path to the classifier artifact. Loaded once at startup; fatal if bad.
    pub model_path: String,
    pub port: u16,
    /// Upper bound on a single generation call, in seconds.
    pub llm_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            frontend_url: optional_env("FRONTEND_URL"),
            model_path: std::env::var("MODEL_PATH")
                .unwrap_or_else(|_| "model/stress_model.json".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and empty as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
