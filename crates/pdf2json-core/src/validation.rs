//! Argument validation for the input and output paths.
//!
//! Provides [`ValidationPolicy`] for choosing how strictly the paths are
//! checked and [`validate_paths`] for applying it.

use std::fmt;
use std::path::Path;

use crate::error::ConvertError;

/// Extension required on the input path.
pub const PDF_EXTENSION: &str = "pdf";

/// Extension required on the output path.
pub const JSON_EXTENSION: &str = "json";

/// How strictly the input and output paths are checked before extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Presence, input existence, and both extensions.
    #[default]
    Strict,
    /// Presence only. Other problems surface when the file is opened.
    Lenient,
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::Strict => write!(f, "strict"),
            ValidationPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

/// Check the input and output paths under `policy`.
///
/// Checks run in a fixed order and the first failure is returned:
/// presence, input existence, `.pdf` input, `.json` output. Extension
/// comparison is case-sensitive. Only filesystem metadata is read.
///
/// # Errors
///
/// Returns [`ConvertError::Validation`] describing the first failed check.
pub fn validate_paths(
    input: &Path,
    output: &Path,
    policy: ValidationPolicy,
) -> Result<(), ConvertError> {
    if input.as_os_str().is_empty() || output.as_os_str().is_empty() {
        return Err(ConvertError::Validation(
            "both input and output file paths must be provided".to_string(),
        ));
    }

    if policy == ValidationPolicy::Lenient {
        return Ok(());
    }

    match std::fs::metadata(input) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConvertError::Validation(format!(
                "input file does not exist: {}",
                input.display()
            )));
        }
        Ok(meta) if meta.is_dir() => {
            return Err(ConvertError::Validation(format!(
                "input path is not a file: {}",
                input.display()
            )));
        }
        // Permission problems and the like are reported by the open.
        _ => {}
    }

    if !has_extension(input, PDF_EXTENSION) {
        return Err(ConvertError::Validation(format!(
            "input file must be a PDF: {}",
            input.display()
        )));
    }

    if !has_extension(output, JSON_EXTENSION) {
        return Err(ConvertError::Validation(format!(
            "output file must have a .json extension: {}",
            output.display()
        )));
    }

    Ok(())
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension().is_some_and(|ext| ext == expected)
}
