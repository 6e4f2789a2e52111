//! Resume ingest — turns an uploaded PDF or DOCX into plain text.
//!
//! Format internals are fully delegated: `pdf-extract` for PDF,
//! `zip` + `quick-xml` for DOCX. This module only dispatches on the file
//! extension and rejects empty results.

pub mod docx;
pub mod pdf;

use std::path::Path;

use tracing::info;

use crate::errors::AppError;

/// Extracts the plain text of a resume file from its raw bytes.
///
/// Dispatches on the (case-insensitive) file extension. Anything other than
/// `.pdf` or `.docx` is rejected, as is a file that yields no text at all.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let text = match extension.as_deref() {
        Some("pdf") => pdf::extract(bytes)?,
        Some("docx") => docx::extract(bytes)?,
        _ => {
            return Err(AppError::UnsupportedFile(
                "Unsupported file type. Please provide a PDF or DOCX file.".to_string(),
            ))
        }
    };

    if text.trim().is_empty() {
        return Err(AppError::Extract(
            "no text could be extracted from the file".to_string(),
        ));
    }

    info!(
        "Extracted {} chars of text from {}",
        text.len(),
        file_name
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let result = extract_text("resume.txt", b"hello");
        assert!(matches!(result, Err(AppError::UnsupportedFile(_))));
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let result = extract_text("resume", b"hello");
        assert!(matches!(result, Err(AppError::UnsupportedFile(_))));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        // Uppercase .DOCX dispatches to the DOCX path (and fails there,
        // because the bytes are not a zip archive — not as unsupported).
        let result = extract_text("Resume.DOCX", b"not a zip");
        assert!(matches!(result, Err(AppError::Extract(_))));
    }

    #[test]
    fn test_docx_with_only_whitespace_text_is_rejected() {
        let bytes = docx::tests::build_docx_bytes("<w:p><w:r><w:t> </w:t></w:r></w:p>");
        let result = extract_text("resume.docx", &bytes);
        assert!(matches!(result, Err(AppError::Extract(_))));
    }

    #[test]
    fn test_docx_round_trip_through_dispatch() {
        let bytes = docx::tests::build_docx_bytes(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>",
        );
        let text = extract_text("resume.docx", &bytes).unwrap();
        assert_eq!(text.trim(), "Jane Doe");
    }
}
