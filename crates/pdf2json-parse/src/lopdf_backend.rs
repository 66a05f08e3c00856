//! lopdf-based PDF text backend.
//!
//! Implements [`TextBackend`] using the [lopdf](https://crates.io/crates/lopdf)
//! crate for PDF document parsing and per-page text extraction. This is the
//! default backend for pdf2json.

use std::io::Read;

use tracing::debug;

use crate::backend::TextBackend;
use crate::error::BackendError;

/// A parsed PDF document backed by lopdf.
pub struct LopdfDocument {
    /// The underlying lopdf document.
    inner: lopdf::Document,
    /// Page numbers as lopdf reports them, in ascending order.
    page_numbers: Vec<u32>,
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_numbers.len())
            .finish_non_exhaustive()
    }
}

/// The lopdf-based text backend.
///
/// # Example
///
/// ```ignore
/// use pdf2json_parse::{LopdfBackend, TextBackend};
///
/// let file = std::fs::File::open("report.pdf")?;
/// let size = file.metadata()?.len();
/// let doc = LopdfBackend::open(file, size)?;
/// let first = LopdfBackend::page_text(&doc, 1)?;
/// ```
pub struct LopdfBackend;

impl TextBackend for LopdfBackend {
    type Document = LopdfDocument;
    type Error = BackendError;

    fn open<R: Read>(mut source: R, size: u64) -> Result<Self::Document, Self::Error> {
        let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
        source.read_to_end(&mut bytes)?;

        let inner = lopdf::Document::load_mem(&bytes)
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        // get_pages returns BTreeMap<u32, ObjectId> with 1-based keys
        let page_numbers: Vec<u32> = inner.get_pages().keys().copied().collect();
        debug!(bytes = bytes.len(), pages = page_numbers.len(), "opened PDF");

        Ok(LopdfDocument {
            inner,
            page_numbers,
        })
    }

    fn page_count(doc: &Self::Document) -> usize {
        doc.page_numbers.len()
    }

    fn page_text(doc: &Self::Document, page: usize) -> Result<String, Self::Error> {
        let number = page
            .checked_sub(1)
            .and_then(|index| doc.page_numbers.get(index))
            .copied()
            .ok_or_else(|| BackendError::Page {
                page,
                message: format!("page out of range (1..={})", doc.page_numbers.len()),
            })?;

        doc.inner
            .extract_text(&[number])
            .map_err(|e| BackendError::Page {
                page,
                message: e.to_string(),
            })
    }
}
