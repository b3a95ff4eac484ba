//! Search domain module
//!
//! Shapes of the data exchanged with the search/crawl service. The service
//! itself is a port in the application layer (`SearchServicePort`) with an
//! HTTP adapter in infrastructure.

pub mod entities;

pub use entities::{
    CrawlFailure, CrawlPageData, CrawlPagesResponse, CrawlResult, CrawlSuccess, SearchOptions,
    SearchResponse, SearchResultItem, SearchTimeRange,
};
