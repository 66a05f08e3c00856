//! Error types for the backend layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides [`BackendError`]
//! that wraps backend-specific errors and converts them to [`ConvertError`].

use pdf2json_core::ConvertError;
use thiserror::Error;

/// Error type for PDF backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The document could not be parsed (structure, syntax, xref).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading PDF data from the source stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text extraction failed for a single page.
    #[error("page {page}: {message}")]
    Page {
        /// 1-based page number.
        page: usize,
        /// What went wrong.
        message: String,
    },
}

impl From<BackendError> for ConvertError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Parse(msg) => {
                ConvertError::Format(format!("failed to create PDF reader: {msg}"))
            }
            BackendError::Io(e) => ConvertError::Io(format!("failed to read PDF data: {e}")),
            e @ BackendError::Page { .. } => ConvertError::Format(e.to_string()),
        }
    }
}
