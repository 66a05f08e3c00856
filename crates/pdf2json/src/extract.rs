//! Extraction driver: read every page of a PDF, in order, into one string.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use pdf2json_core::{ConvertError, DocumentContent, Extraction, PageWarning};
use pdf2json_parse::TextBackend;
use tracing::{debug, warn};

/// Extract the text of the PDF at `path` using backend `B`.
///
/// The input file is closed before page extraction starts, and on every
/// error path.
///
/// # Errors
///
/// Returns [`ConvertError::Io`] if the file cannot be opened or stat'ed,
/// and the backend's converted error (normally [`ConvertError::Format`])
/// if no reader can be constructed over it. Page failures are not errors;
/// they are reported in [`Extraction::warnings`].
pub fn extract_file<B: TextBackend>(path: &Path) -> Result<Extraction, ConvertError> {
    let file = File::open(path)
        .map_err(|e| ConvertError::Io(format!("failed to open file: {e}")))?;
    let size = file
        .metadata()
        .map_err(|e| ConvertError::Io(format!("failed to get file info: {e}")))?
        .len();
    debug!(path = %path.display(), size, "opened input file");

    let opened = B::open(BufReader::new(&file), size);
    drop(file);

    let doc = opened.map_err(Into::into)?;
    Ok(extract_pages::<B>(&doc))
}

/// Extract the text of a PDF read from `source`, which holds `size` bytes.
///
/// # Errors
///
/// Returns the backend's converted error if no reader can be constructed.
pub fn extract_reader<B: TextBackend, R: Read>(
    source: R,
    size: u64,
) -> Result<Extraction, ConvertError> {
    let doc = B::open(source, size).map_err(Into::into)?;
    Ok(extract_pages::<B>(&doc))
}

/// Collect the text of pages 1..=N of an opened document.
///
/// A page whose text cannot be read is logged, recorded as a
/// [`PageWarning`], and contributes nothing to the content.
pub fn extract_pages<B: TextBackend>(doc: &B::Document) -> Extraction {
    let page_count = B::page_count(doc);
    debug!(pages = page_count, "extracting text");

    let mut document = DocumentContent::new();
    let mut warnings = Vec::new();

    for page in 1..=page_count {
        match B::page_text(doc, page) {
            Ok(text) => document.push_page(&text),
            Err(e) => {
                warn!(page, error = %e, "failed to read page");
                warnings.push(PageWarning::new(page, e.to_string()));
            }
        }
    }

    Extraction {
        document,
        page_count,
        warnings,
    }
}
