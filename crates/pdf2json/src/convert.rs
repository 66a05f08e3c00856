//! The validate → extract → write pipeline.

use std::path::Path;

use pdf2json_core::{ConvertError, Extraction, ValidationPolicy, validate_paths};
use pdf2json_parse::{LopdfBackend, TextBackend};

use crate::extract::extract_file;
use crate::writer::write_json;

/// Options controlling a conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// How strictly the paths are checked before anything is read.
    pub validation: ValidationPolicy,
}

impl ConvertOptions {
    /// Options that only require both paths to be present.
    pub fn lenient() -> Self {
        Self {
            validation: ValidationPolicy::Lenient,
        }
    }
}

/// Convert the PDF at `input` into a JSON file at `output` using lopdf.
///
/// See [`convert_with`].
///
/// # Errors
///
/// Returns the first fatal [`ConvertError`].
pub fn convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<Extraction, ConvertError> {
    convert_with::<LopdfBackend>(input, output, options)
}

/// Convert the PDF at `input` into a JSON file at `output` using backend `B`.
///
/// The output path is only opened after validation and extraction have
/// succeeded, so a failed run never creates or modifies it.
///
/// # Errors
///
/// Returns the first fatal [`ConvertError`]: validation, open, reader
/// construction, serialization or write.
pub fn convert_with<B: TextBackend>(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<Extraction, ConvertError> {
    validate_paths(input, output, options.validation)?;
    let extraction = extract_file::<B>(input)?;
    write_json(output, &extraction.document)?;
    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_strict() {
        assert_eq!(
            ConvertOptions::default().validation,
            ValidationPolicy::Strict
        );
        assert_eq!(
            ConvertOptions::lenient().validation,
            ValidationPolicy::Lenient
        );
    }

    #[test]
    fn validation_failure_does_not_touch_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.json");

        let err = convert(
            Path::new("/nonexistent/report.pdf"),
            &output,
            &ConvertOptions::default(),
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(!output.exists());
    }

    #[test]
    fn lenient_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");

        let err = convert(
            Path::new("/nonexistent/report.txt"),
            &output,
            &ConvertOptions::lenient(),
        )
        .unwrap_err();

        assert!(matches!(err, ConvertError::Io(_)));
        assert!(!output.exists());
    }

    #[test]
    fn corrupt_pdf_is_format_error_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.pdf");
        std::fs::write(&input, b"not really a pdf").unwrap();
        let output = dir.path().join("out.json");

        let err = convert(&input, &output, &ConvertOptions::default()).unwrap_err();

        assert!(matches!(err, ConvertError::Format(_)));
        assert!(!output.exists());
    }
}
