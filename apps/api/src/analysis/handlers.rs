//! Axum route handlers for the Resume API.

use anyhow::Context;
use axum::{
    extract::{Multipart, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{allowed_file, extract_text, validate_file};
use crate::models::analysis::AnalysisReport;
use crate::state::AppState;
use crate::upload::{parse_multipart, sanitize_filename, TempUpload};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub filename: String,
    pub original_text: String,
    pub analysis: AnalysisReport,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub original_text: String,
    pub analysis: AnalysisReport,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub optimized_content: String,
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    #[serde(default)]
    pub content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Multipart upload (file field `resume`) → text extraction → LLM critique.
/// The on-disk copy of the upload never outlives this handler: the guard
/// removes it on every exit path.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = parse_multipart(multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No file selected".to_string()))?;

    if upload.filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !allowed_file(&upload.filename) {
        return Err(AppError::Validation(
            "Invalid file type. Please upload PDF or DOCX files only.".to_string(),
        ));
    }

    let filename = sanitize_filename(&upload.filename);
    let saved = TempUpload::save(
        std::path::Path::new(&state.config.upload_dir),
        &filename,
        &upload.data,
    )
    .context("saving uploaded resume")?;

    validate_file(saved.path(), state.config.max_upload_mb)?;
    let original_text = extract_text(saved.path())?;

    info!(
        "Extracted {} chars from '{}', requesting analysis",
        original_text.len(),
        filename
    );

    let analysis = state.analyzer.analyze(&original_text).await;

    Ok(Json(AnalyzeResponse {
        filename,
        original_text,
        analysis,
    }))
}

/// POST /api/v1/resumes/optimize
///
/// Generates optimized resume content from the original text and a prior
/// critique. The response is always 200: a failed LLM call yields the fixed
/// error string in `optimized_content`.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if request.original_text.trim().is_empty() {
        return Err(AppError::Validation(
            "original_text cannot be empty".to_string(),
        ));
    }

    let optimized_content = state
        .analyzer
        .optimize(&request.original_text, &request.analysis)
        .await;

    Ok(Json(OptimizeResponse { optimized_content }))
}

/// GET /api/v1/resumes/optimized/download?content=...
///
/// Returns the given text as a plain-text attachment named
/// `optimized_resume.txt`.
pub async fn handle_download_optimized(
    Query(query): Query<DownloadQuery>,
) -> Result<Response, AppError> {
    if query.content.trim().is_empty() {
        return Err(AppError::Validation(
            "No optimized content available".to_string(),
        ));
    }

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"optimized_resume.txt\"",
        ),
    ];

    Ok((StatusCode::OK, headers, query.content).into_response())
}
