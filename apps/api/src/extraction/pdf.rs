//! PDF text extraction.
//!
//! Pages are walked in order; pages yielding no text contribute nothing.
//! Password-protected documents are never attempted.

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::ExtractError;

pub fn extract(path: &Path) -> Result<String, ExtractError> {
    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            // Some encrypted documents fail at load rather than reporting
            // their encryption state afterwards.
            let msg = e.to_string();
            let lower = msg.to_lowercase();
            if lower.contains("encrypt") || lower.contains("password") || lower.contains("decrypt")
            {
                return Err(ExtractError::Encrypted);
            }
            return Err(ExtractError::Pdf(msg));
        }
    };

    if doc.is_encrypted() {
        return Err(ExtractError::Encrypted);
    }

    let mut text = String::new();
    for (page_num, _page_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) if !page_text.trim().is_empty() => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Ok(_) => {}
            Err(e) => {
                // A single unreadable page is skipped, not fatal.
                debug!("Skipping page {page_num}: {e}");
            }
        }
    }

    if text.trim().is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(text.trim().to_string())
}
