//! Video file storage for skill demonstrations.
//!
//! Files land under `{uploads_dir}/videos/` with a name derived from the
//! skill, the upload time and a random suffix, and are served back through
//! the static `/uploads` route.

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;

pub const VIDEOS_SUBDIR: &str = "videos";

#[derive(Debug)]
pub struct StoredVideo {
    pub filename: String,
    pub video_url: String,
    pub uploaded_at: i64,
}

/// Collision-resistant filename: sanitized skill, unix timestamp, 8 random
/// hex chars.
pub fn video_filename(skill: &str, uploaded_at: i64) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}.webm",
        sanitize_component(skill),
        uploaded_at,
        &suffix[..8]
    )
}

/// Restricts a user-supplied filename component to alphanumerics, `-` and
/// `_`, so it can never escape the videos directory.
fn sanitize_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

pub async fn save_video(
    uploads_dir: &Path,
    skill: &str,
    data: &[u8],
) -> Result<StoredVideo, AppError> {
    let dir = uploads_dir.join(VIDEOS_SUBDIR);
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::Storage(format!("failed to create video directory: {e}")))?;

    let uploaded_at = Utc::now().timestamp();
    let filename = video_filename(skill, uploaded_at);
    let path = dir.join(&filename);

    tokio::fs::write(&path, data)
        .await
        .map_err(|e| AppError::Storage(format!("failed to persist video: {e}")))?;

    Ok(StoredVideo {
        video_url: format!("/uploads/{VIDEOS_SUBDIR}/{filename}"),
        filename,
        uploaded_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_carries_skill_and_timestamp() {
        let name = video_filename("React", 1_700_000_000);
        assert!(name.starts_with("React_1700000000_"));
        assert!(name.ends_with(".webm"));
    }

    #[test]
    fn test_filenames_are_collision_resistant() {
        let a = video_filename("React", 1_700_000_000);
        let b = video_filename("React", 1_700_000_000);
        assert_ne!(a, b);
    }

    #[test]
    fn test_skill_component_is_sanitized() {
        let name = video_filename("../../etc/passwd", 1);
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));
        assert!(name.starts_with("______etc_passwd_1_"));
    }

    #[tokio::test]
    async fn test_save_video_writes_file_and_builds_url() {
        let dir = tempfile::tempdir().unwrap();
        let stored = save_video(dir.path(), "Python", b"webm-bytes").await.unwrap();

        assert!(stored.video_url.starts_with("/uploads/videos/Python_"));
        let on_disk = dir.path().join(VIDEOS_SUBDIR).join(&stored.filename);
        let bytes = tokio::fs::read(on_disk).await.unwrap();
        assert_eq!(bytes, b"webm-bytes");
    }
}
