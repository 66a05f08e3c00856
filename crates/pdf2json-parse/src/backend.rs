//! PDF text backend trait.
//!
//! Defines the [`TextBackend`] trait, the only capability pdf2json needs
//! from a PDF library: open a document, report its page count, and return
//! the plain text of one page.

use std::io::Read;

use pdf2json_core::ConvertError;

/// Trait abstracting the PDF reader used for text extraction.
///
/// # Associated Types
///
/// - `Document`: The opened reader session over one PDF.
/// - `Error`: Backend-specific error type, convertible to [`ConvertError`].
///
/// # Usage
///
/// ```ignore
/// let doc = MyBackend::open(file, size)?;
/// for page in 1..=MyBackend::page_count(&doc) {
///     let text = MyBackend::page_text(&doc, page)?;
/// }
/// ```
pub trait TextBackend {
    /// The opened document type.
    type Document;

    /// Backend-specific error type, convertible to [`ConvertError`].
    type Error: std::error::Error + Into<ConvertError>;

    /// Construct a reader over `source`, which holds `size` bytes.
    ///
    /// The backend may consume the whole stream. The caller keeps ownership
    /// of the underlying handle and closes it once this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read or is not a valid PDF.
    fn open<R: Read>(source: R, size: u64) -> Result<Self::Document, Self::Error>;

    /// Return the number of pages in the document.
    fn page_count(doc: &Self::Document) -> usize;

    /// Plain text of the page with 1-based number `page`.
    ///
    /// # Errors
    ///
    /// Returns an error if the page is out of range or its content cannot
    /// be decoded.
    fn page_text(doc: &Self::Document, page: usize) -> Result<String, Self::Error>;
}
