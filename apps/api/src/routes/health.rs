use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Skill Extractor & Assessment System is running!",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
/// Returns a simple status object and whether AI generation is available.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "resume-skill-extractor-assessment",
        "ai_configured": state.generator.is_configured()
    }))
}
