use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// The generation API key is optional: without it the service still runs,
/// serving predefined and fallback assessments only.
#[derive(Debug, Clone)]
pub struct Config {
    pub cohere_api_key: Option<String>,
    pub port: u16,
    pub uploads_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            cohere_api_key: std::env::var("COHERE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8002".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            uploads_dir: std::env::var("UPLOADS_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
