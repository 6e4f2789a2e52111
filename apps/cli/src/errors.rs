use thiserror::Error;

/// Application-level error type.
///
/// Every failure in ingest, refinement, letter generation, or export funnels
/// into one of these variants; the session layer reduces them to a single
/// user-facing message per action.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    UnsupportedFile(String),

    #[error("Extraction error: {0}")]
    Extract(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
