//! Search Service port
//!
//! Defines the interface to the web search and page crawling backend.

use async_trait::async_trait;
use thiserror::Error;
use toolhost_domain::search::{CrawlPagesResponse, SearchOptions, SearchResponse};

/// Errors that can occur while talking to the search service
#[derive(Error, Debug)]
pub enum SearchServiceError {
    #[error("Search service is not configured: {0}")]
    NotConfigured(String),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Search service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

/// Backend for web search and crawling
///
/// Implementations (adapters) live in the infrastructure layer.
///
/// `crawl_pages` reports per-URL failures inside the returned
/// [`CrawlPagesResponse`] (as `CrawlPageData::Failure`); an `Err` means the
/// crawl as a whole could not be performed.
#[async_trait]
pub trait SearchServicePort: Send + Sync {
    /// Run a search query
    ///
    /// A blank `query` is rejected with [`SearchServiceError::EmptyQuery`].
    async fn query(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, SearchServiceError>;

    /// Crawl the given URLs, one result per URL in order
    async fn crawl_pages(&self, urls: &[String]) -> Result<CrawlPagesResponse, SearchServiceError>;
}
