//! pdf2json-core: Backend-independent data types for pdf2json.
//!
//! This crate provides the document record, the error and warning types,
//! and path validation shared by the parsing backend and the CLI. It does
//! not touch any PDF library.

pub mod content;
pub mod error;
pub mod validation;

pub use content::{DocumentContent, Extraction};
pub use error::{ConvertError, PageWarning};
pub use validation::{JSON_EXTENSION, PDF_EXTENSION, ValidationPolicy, validate_paths};
