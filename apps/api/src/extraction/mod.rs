// Text Extraction — turns an uploaded PDF/DOCX into plain text.
// Dispatch is by file extension; each format walks its document structure in
// order and concatenates whatever text it finds. No LLM calls here.

pub mod docx;
pub mod pdf;

use std::path::Path;

use thiserror::Error;

/// File suffixes the service accepts, matched case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "doc"];

/// Typed extraction failures. `Display` strings double as the user-facing
/// messages rendered by `AppError`.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    Unsupported(String),

    #[error("PDF is password protected and cannot be processed")]
    Encrypted,

    #[error("Could not extract text from the file. Please ensure it contains readable text.")]
    NoText,

    #[error("File does not exist")]
    Missing,

    #[error("File too large. Maximum size is {max_mb}MB.")]
    TooLarge { max_mb: u64 },

    #[error("Could not read PDF file: {0}")]
    Pdf(String),

    #[error("Could not read DOCX file: {0}")]
    Docx(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Checks whether a client-supplied filename carries an allowed extension.
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Extracts plain text from the file at `path`, dispatching on its extension.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => pdf::extract(path),
        "docx" | "doc" => docx::extract(path),
        other => Err(ExtractError::Unsupported(other.to_string())),
    }
}

/// Fail-fast guard used before attempting a read: the file must exist, fit the
/// configured ceiling, and carry an allowed extension.
pub fn validate_file(path: &Path, max_size_mb: u64) -> Result<(), ExtractError> {
    if !path.exists() {
        return Err(ExtractError::Missing);
    }

    let size = std::fs::metadata(path)?.len();
    let max_bytes = max_size_mb * 1024 * 1024;
    if size > max_bytes {
        return Err(ExtractError::TooLarge { max_mb: max_size_mb });
    }

    let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if !allowed_file(filename) {
        return Err(ExtractError::Unsupported(
            filename.rsplit_once('.').map(|(_, e)| e).unwrap_or("").to_string(),
        ));
    }

    Ok(())
}
