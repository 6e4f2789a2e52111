use crate::errors::AppError;

/// Extracts plain text from PDF bytes via the `pdf-extract` crate.
pub fn extract(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extract(format!("PDF extraction failed: {e}")))
}
