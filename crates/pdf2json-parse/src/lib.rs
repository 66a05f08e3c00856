//! pdf2json-parse: PDF reading backends.
//!
//! This crate defines the [`TextBackend`] capability trait and its lopdf
//! implementation. It depends on pdf2json-core for shared error types.

pub mod backend;
pub mod error;
pub mod lopdf_backend;

pub use backend::TextBackend;
pub use error::BackendError;
pub use lopdf_backend::{LopdfBackend, LopdfDocument};
pub use pdf2json_core;
