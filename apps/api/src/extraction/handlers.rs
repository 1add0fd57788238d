//! Axum route handler for resume analysis.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::text::extract_text;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeAnalysisResponse {
    pub skills: Vec<String>,
    pub filename: String,
    pub text_length: usize,
    pub skills_count: usize,
    pub extraction_method: &'static str,
}

/// POST /analyze_resume
///
/// Accepts a multipart resume upload (field `file`), decodes it to text and
/// returns the extracted, canonicalized skill list.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("resume.txt").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            upload = Some((filename, data));
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;

    let text = extract_text(&data, &filename);
    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract text from the uploaded file".to_string(),
        ));
    }

    let skills = state.lexicon.extract(&text);
    info!("extracted {} skills from {filename}", skills.len());

    Ok(Json(ResumeAnalysisResponse {
        skills_count: skills.len(),
        text_length: text.len(),
        skills,
        filename,
        extraction_method: "local_patterns",
    }))
}
