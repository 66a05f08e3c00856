//! JSON serialization and output file writing.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use pdf2json_core::{ConvertError, DocumentContent};
use tracing::debug;

/// Permission bits for a newly created output file (Unix only).
pub const OUTPUT_FILE_MODE: u32 = 0o644;

/// Serialize `doc` as pretty-printed JSON with two-space indentation.
///
/// # Errors
///
/// Returns [`ConvertError::Serialization`] if encoding fails.
pub fn to_json(doc: &DocumentContent) -> Result<String, ConvertError> {
    serde_json::to_string_pretty(doc)
        .map_err(|e| ConvertError::Serialization(format!("failed to marshal JSON: {e}")))
}

/// Write `doc` as JSON to `path`, creating or truncating the file.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`ConvertError::Serialization`] if encoding fails, or
/// [`ConvertError::Io`] if the file cannot be created or written.
pub fn write_json(path: &Path, doc: &DocumentContent) -> Result<usize, ConvertError> {
    let json = to_json(doc)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_FILE_MODE);
    }

    let write_err = |e: std::io::Error| ConvertError::Io(format!("failed to write JSON file: {e}"));
    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    debug!(path = %path.display(), bytes = json.len(), "wrote JSON output");
    Ok(json.len())
}
