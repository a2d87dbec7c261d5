use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Accepts `application/pdf`, ignoring case and any media-type parameters.
pub fn ensure_pdf(content_type: Option<&str>) -> Result<(), AppError> {
    let essence = content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .unwrap_or_default();
    if essence.eq_ignore_ascii_case(PDF_CONTENT_TYPE) {
        Ok(())
    } else {
        Err(AppError::Validation("Only PDF files are allowed".to_string()))
    }
}

/// Extracts plain text from an in-memory PDF on the blocking pool.
/// A panic inside the parser is reported as an extraction failure.
pub async fn extract_text(data: Bytes) -> Result<String, AppError> {
    let size = data.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| AppError::PdfExtraction(format!("extraction task aborted: {e}")))?
        .map_err(|e| AppError::PdfExtraction(e.to_string()))?;
    debug!(bytes = size, chars = text.len(), "Extracted PDF text");
    Ok(text)
}
