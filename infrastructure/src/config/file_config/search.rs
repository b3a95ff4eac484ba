//! Search service configuration from TOML (`[search]` section)
//!
//! ```toml
//! [search]
//! base_url = "http://localhost:8080"
//! timeout_secs = 30
//! max_crawl_length = 51200
//! ```

use serde::{Deserialize, Serialize};
use toolhost_domain::{ConfigIssue, ConfigIssueCode};

/// Default HTTP timeout for search and crawl requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default max extracted text per crawled page (50 KB)
pub const DEFAULT_MAX_CRAWL_LENGTH: usize = 50 * 1024;

/// Default max response body size (5 MB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Raw search service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Base URL of a SearXNG instance (e.g. `http://localhost:8080`)
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Max bytes of text kept per crawled page
    pub max_crawl_length: usize,
    /// Max bytes accepted from a single response body
    pub max_body_size: usize,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("toolhost/", env!("CARGO_PKG_VERSION")).to_string(),
            max_crawl_length: DEFAULT_MAX_CRAWL_LENGTH,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl FileSearchConfig {
    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        match self.base_url.as_deref().map(str::trim) {
            None | Some("") => issues.push(ConfigIssue::warning(
                ConfigIssueCode::SearchBaseUrlMissing,
                "search.base_url is not set; the search API will be unavailable",
            )),
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidSearchBaseUrl,
                    format!("search.base_url: '{}' is not an http(s) URL", url),
                ))
            }
            Some(_) => {}
        }

        for (field, value) in [
            ("search.timeout_secs", self.timeout_secs as usize),
            ("search.max_crawl_length", self.max_crawl_length),
            ("search.max_body_size", self.max_body_size),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroLimit,
                    format!("{} must be greater than 0", field),
                ));
            }
        }

        issues
    }
}
