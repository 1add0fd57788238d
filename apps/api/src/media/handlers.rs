//! Axum route handler for skill-video uploads.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::media::storage::save_video;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VideoUploadResponse {
    pub success: bool,
    pub video_url: String,
    pub filename: String,
    pub skill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub uploaded_at: i64,
}

/// POST /upload_skill_video
///
/// Multipart fields: `video` (content type video/*), `skill`, optional
/// `duration` in seconds.
pub async fn handle_upload_skill_video(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<VideoUploadResponse>, AppError> {
    let mut video: Option<Bytes> = None;
    let mut skill: Option<String> = None;
    let mut duration: Option<u32> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        match field.name() {
            Some("video") => {
                let content_type = field.content_type().unwrap_or("");
                if !content_type.starts_with("video/") {
                    return Err(AppError::Validation("File must be a video".to_string()));
                }
                video = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?,
                );
            }
            Some("skill") => {
                skill = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("failed to read 'skill' field: {e}"))
                })?);
            }
            Some("duration") => {
                duration = field
                    .text()
                    .await
                    .map_err(|e| {
                        AppError::Validation(format!("failed to read 'duration' field: {e}"))
                    })?
                    .trim()
                    .parse()
                    .ok();
            }
            _ => {}
        }
    }

    let video = video.ok_or_else(|| AppError::Validation("missing 'video' field".to_string()))?;
    let skill = skill.ok_or_else(|| AppError::Validation("missing 'skill' field".to_string()))?;

    let stored = save_video(&state.config.uploads_dir, &skill, &video).await?;
    info!("video uploaded: {} for skill: {skill}", stored.filename);

    Ok(Json(VideoUploadResponse {
        success: true,
        video_url: stored.video_url,
        filename: stored.filename,
        skill,
        duration,
        uploaded_at: stored.uploaded_at,
    }))
}
