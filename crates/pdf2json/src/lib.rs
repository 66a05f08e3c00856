//! pdf2json: Extract the plain text of a PDF into a single-key JSON document.
//!
//! This is the public API facade crate for pdf2json. It re-exports types from
//! pdf2json-core and uses pdf2json-parse for PDF reading.
//!
//! # Architecture
//!
//! - **pdf2json-core**: Backend-independent record, errors and path validation
//! - **pdf2json-parse**: The [`TextBackend`] trait and its lopdf implementation
//! - **pdf2json** (this crate): Extraction driver, JSON writer and the
//!   [`convert`] pipeline
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pdf2json::{ConvertOptions, convert};
//!
//! let extraction = convert(
//!     Path::new("report.pdf"),
//!     Path::new("out.json"),
//!     &ConvertOptions::default(),
//! )?;
//! assert!(extraction.is_clean());
//! ```

mod convert;
mod extract;
mod writer;

pub use convert::{ConvertOptions, convert, convert_with};
pub use extract::{extract_file, extract_pages, extract_reader};
pub use writer::{OUTPUT_FILE_MODE, to_json, write_json};

pub use pdf2json_core;
pub use pdf2json_core::{
    ConvertError, DocumentContent, Extraction, PageWarning, ValidationPolicy, validate_paths,
};
pub use pdf2json_parse;
pub use pdf2json_parse::{BackendError, LopdfBackend, TextBackend};
