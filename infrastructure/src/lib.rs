//! Infrastructure layer for toolhost
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod document;
pub mod web;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileDocumentConfig, FileSearchConfig};
pub use document::{DocumentLoadError, DocxLoader};
pub use web::HttpSearchService;
