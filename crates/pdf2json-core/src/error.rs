//! Error and warning types for pdf2json.
//!
//! Provides [`ConvertError`] for fatal errors that stop a conversion and
//! [`PageWarning`] for per-page failures that allow best-effort continuation.

use std::fmt;

/// Fatal error types for a PDF-to-JSON conversion.
///
/// Any of these terminates the run before the output file is written
/// (except [`ConvertError::Io`] raised by the write itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Bad or missing arguments, wrong extensions, missing input file.
    Validation(String),
    /// Open, stat or write failure.
    Io(String),
    /// The PDF reader could not be constructed over the input.
    Format(String),
    /// The extracted content could not be encoded as JSON.
    Serialization(String),
}

impl ConvertError {
    /// Returns true for argument validation failures.
    ///
    /// The CLI prints its usage line after these.
    pub fn is_validation(&self) -> bool {
        matches!(self, ConvertError::Validation(_))
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Validation(msg) => write!(f, "{msg}"),
            ConvertError::Io(msg) => write!(f, "I/O error: {msg}"),
            ConvertError::Format(msg) => write!(f, "format error: {msg}"),
            ConvertError::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}

/// A non-fatal failure to extract the text of one page.
///
/// The page contributes empty text to the document and extraction moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWarning {
    /// 1-based page number.
    pub page: usize,
    /// Human-readable description of the failure.
    pub description: String,
}

impl PageWarning {
    /// Create a warning for `page` (1-based).
    pub fn new(page: usize, description: impl Into<String>) -> Self {
        Self {
            page,
            description: description.into(),
        }
    }
}

impl fmt::Display for PageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read page {}: {}", self.page, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message_verbatim() {
        let err = ConvertError::Validation("input file must be a PDF: a.txt".to_string());
        assert_eq!(err.to_string(), "input file must be a PDF: a.txt");
        assert!(err.is_validation());
    }

    #[test]
    fn io_error_display() {
        let err = ConvertError::Io("failed to open file: denied".to_string());
        assert_eq!(err.to_string(), "I/O error: failed to open file: denied");
        assert!(!err.is_validation());
    }

    #[test]
    fn format_error_display() {
        let err = ConvertError::Format("failed to create PDF reader: bad xref".to_string());
        assert_eq!(
            err.to_string(),
            "format error: failed to create PDF reader: bad xref"
        );
    }

    #[test]
    fn serialization_error_display() {
        let err = ConvertError::Serialization("invalid utf-8".to_string());
        assert_eq!(err.to_string(), "serialization error: invalid utf-8");
    }

    #[test]
    fn convert_error_implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ConvertError::Format("x".to_string()));
        assert!(err.to_string().contains("x"));
    }

    #[test]
    fn page_warning_display() {
        let warning = PageWarning::new(3, "missing content stream");
        assert_eq!(
            warning.to_string(),
            "failed to read page 3: missing content stream"
        );
        assert_eq!(warning.page, 3);
    }
}
