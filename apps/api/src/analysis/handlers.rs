//! Axum route handler for assessment submission and analysis.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::analysis::analyzer::{analyze, AnalysisResult};
use crate::analysis::grading::grade_answers;
use crate::assessment::models::AssessmentSubmission;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
    pub message: String,
}

/// POST /submit_assessment
///
/// Grades the submitted answers against the stored assessment, then runs the
/// analyzer (AI tier with deterministic fallback).
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    Json(submission): Json<AssessmentSubmission>,
) -> Result<Json<SubmitResponse>, AppError> {
    let assessment = state.assessments.get(&submission.assessment_id).ok_or_else(|| {
        AppError::NotFound(format!(
            "Assessment {} not found",
            submission.assessment_id
        ))
    })?;

    let graded = grade_answers(&assessment, &submission.answers);
    info!(
        "graded {} answers for assessment {} ({} min taken)",
        graded.len(),
        submission.assessment_id,
        submission.time_taken
    );

    let analysis = analyze(
        &submission.assessment_id,
        &graded,
        &assessment.skills_tested,
        state.generator.as_ref(),
    )
    .await;

    Ok(Json(SubmitResponse {
        success: true,
        analysis,
        message: "Assessment submitted and analyzed successfully".to_string(),
    }))
}
