//! Upload boundary policy: accepted media type, size cap, title and
//! page-number validation, and collision-free stored filenames.

use crate::error::CoreError;

/// The only accepted media type for uploads.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Maximum accepted upload size (50 MiB).
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Validate an uploaded file's declared media type and size.
pub fn validate_upload(content_type: Option<&str>, size: usize) -> Result<(), CoreError> {
    match content_type {
        Some(ct) if ct == PDF_CONTENT_TYPE => {}
        _ => {
            return Err(CoreError::Validation(
                "Only PDF files are allowed".to_string(),
            ))
        }
    }
    if size == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".to_string()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "File exceeds the {} MiB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }
    Ok(())
}

/// Validate and normalize a paper title.
pub fn validate_title(title: &str) -> Result<String, CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Title is required".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Validate and normalize highlighted text.
pub fn validate_highlighted_text(text: &str) -> Result<String, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "highlightedText must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate a 1-based page number.
pub fn validate_page_number(page_number: i32) -> Result<(), CoreError> {
    if page_number < 1 {
        return Err(CoreError::Validation(format!(
            "pageNumber must be a positive integer, got {page_number}"
        )));
    }
    Ok(())
}

/// Generate a unique stored filename for an upload.
///
/// The original filename is kept only as display metadata; the stored
/// name is a UUID so concurrent uploads of identically named files
/// never collide, with a fixed `.pdf` extension since only PDFs are
/// accepted.
pub fn stored_filename() -> String {
    format!("{}.pdf", uuid::Uuid::new_v4())
}
