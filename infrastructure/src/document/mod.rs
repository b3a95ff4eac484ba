//! Document loaders
//!
//! Implementations of [`DocumentLoaderPort`](toolhost_application::DocumentLoaderPort).

mod docx;

pub use docx::{DEFAULT_MAX_FILE_SIZE, DocumentLoadError, DocxLoader};
