//! Domain layer for toolhost
//!
//! This crate contains the core types of the two integration pieces:
//!
//! - **Documents**: [`Page`] records produced by a document loader and the
//!   pure [`aggregate_content`] step that joins them.
//! - **Builtin tools**: the [`ToolPayload`] → [`ToolExecutionResult`]
//!   envelope, closed dispatch enums and lenient argument parsing.
//! - **Search**: records exchanged with the search/crawl service.
//!
//! It has no dependencies on infrastructure or presentation concerns.

pub mod config;
pub mod core;
pub mod document;
pub mod search;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use document::{PAGE_SEPARATOR, Page, PageMetadata, aggregate_content};
pub use search::{
    CrawlFailure, CrawlPageData, CrawlPagesResponse, CrawlResult, CrawlSuccess, SearchOptions,
    SearchResponse, SearchResultItem, SearchTimeRange,
};
pub use tool::{
    BuiltinToolIdentifier, ToolExecutionContext, ToolExecutionResult, ToolPayload,
    WebBrowsingApi, parse_arguments,
};
