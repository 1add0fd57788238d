mod analysis;
mod assessment;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod media;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::cache::AssessmentCache;
use crate::assessment::store::AssessmentStore;
use crate::config::Config;
use crate::extraction::skills::SkillLexicon;
use crate::llm_client::{CohereClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Skill Assessment API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Initialize the generation client. A missing key is not fatal: the
    // predefined and fallback tiers keep the service useful.
    let generator = CohereClient::new(config.cohere_api_key.clone());
    if generator.is_configured() {
        info!("generation client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("No generation API key found - assessment features will be limited");
    }

    // Ensure the video upload directory exists before serving
    let videos_dir = config.uploads_dir.join(media::storage::VIDEOS_SUBDIR);
    tokio::fs::create_dir_all(&videos_dir).await?;

    // Build app state
    let state = AppState {
        generator: Arc::new(generator),
        lexicon: Arc::new(SkillLexicon::new()),
        cache: Arc::new(AssessmentCache::new()),
        assessments: Arc::new(AssessmentStore::new()),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
