//! Document Loader port
//!
//! Defines the interface for turning a document file into pages.

use async_trait::async_trait;
use std::path::Path;
use toolhost_domain::document::{Page, aggregate_content};

/// Loader for page-segmented documents.
///
/// `load_pages` never fails: a file that cannot be opened or parsed is
/// returned as a single page built with [`Page::load_error`]. Callers never
/// need failure handling of their own.
#[async_trait]
pub trait DocumentLoaderPort: Send + Sync {
    /// Load the document at `path`, one [`Page`] per logical page
    async fn load_pages(&self, path: &Path) -> Vec<Page>;

    /// Join page contents with the standard page separator
    fn aggregate_content(&self, pages: &[Page]) -> String {
        aggregate_content(pages)
    }
}
