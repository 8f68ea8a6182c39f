//! Multipart upload helpers — form parsing, filename sanitizing, and the
//! transient on-disk lifetime of an uploaded resume.

use std::path::{Path, PathBuf};

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use tracing::debug;

use crate::errors::AppError;

/// An uploaded resume with its original filename and raw bytes.
pub struct UploadedResume {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parses the multipart form and returns the `resume` file field, if present.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<Option<UploadedResume>, AppError> {
    let mut file: Option<UploadedResume> = None;

    while let Some(field) = multipart.next_field().await.map_err(map_multipart_err)? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await.map_err(map_multipart_err)?.to_vec();
                file = Some(UploadedResume { filename, data });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    Ok(file)
}

fn map_multipart_err(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(format!("Failed to read form field: {e}"))
    }
}

/// Strips path components from a client filename and replaces anything outside
/// `[A-Za-z0-9._-]`. Leading dots go too, so an upload can never hide as a
/// dotfile. Falls back to `resume` when nothing usable remains.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "resume".to_string()
    } else {
        cleaned.to_string()
    }
}

/// RAII guard for the on-disk copy of an upload. The file is removed when the
/// guard drops, on success and failure paths alike.
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    /// Writes `data` to `dir/filename` and returns the guard.
    pub fn save(dir: &Path, filename: &str, data: &[u8]) -> std::io::Result<TempUpload> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(filename);
        std::fs::write(&path, data)?;
        Ok(TempUpload { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            debug!("Failed to remove upload {}: {e}", self.path.display());
        }
    }
}
