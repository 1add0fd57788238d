pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::analysis;
use crate::assessment;
use crate::extraction;
use crate::media;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.uploads_dir);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Resume analysis
        .route(
            "/analyze_resume",
            post(extraction::handlers::handle_analyze_resume),
        )
        // Assessment generation
        .route(
            "/generate_assessment",
            post(assessment::handlers::handle_generate_assessment),
        )
        .route(
            "/generate_skill_assessment",
            post(assessment::handlers::handle_generate_skill_assessment),
        )
        .route(
            "/generate_all_skill_assessments",
            post(assessment::handlers::handle_generate_all_skill_assessments),
        )
        // Submission and analysis
        .route(
            "/submit_assessment",
            post(analysis::handlers::handle_submit_assessment),
        )
        // Skill demonstration videos
        .route(
            "/upload_skill_video",
            post(media::handlers::handle_upload_skill_video),
        )
        .nest_service("/uploads", uploads)
        .with_state(state)
}
