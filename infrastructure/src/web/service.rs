//! HTTP-backed [`SearchServicePort`] adapter

use super::crawl::{self, CrawlLimits};
use super::searxng;
use crate::config::FileSearchConfig;
use async_trait::async_trait;
use futures::future::join_all;
use std::time::Duration;
use toolhost_application::{SearchServiceError, SearchServicePort};
use toolhost_domain::search::{CrawlPagesResponse, SearchOptions, SearchResponse};
use tracing::{debug, info};

/// Search service that queries SearXNG and crawls pages directly.
///
/// Crawls of several URLs run concurrently; results keep the request order.
pub struct HttpSearchService {
    client: reqwest::Client,
    base_url: Option<String>,
    limits: CrawlLimits,
}

impl HttpSearchService {
    /// Build the service and its shared HTTP client from `[search]` settings.
    pub fn new(config: &FileSearchConfig) -> Result<Self, SearchServiceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                SearchServiceError::NotConfigured(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config
                .base_url
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            limits: CrawlLimits {
                max_length: config.max_crawl_length,
                max_body_size: config.max_body_size,
            },
        })
    }
}

#[async_trait]
impl SearchServicePort for HttpSearchService {
    async fn query(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, SearchServiceError> {
        if query.trim().is_empty() {
            return Err(SearchServiceError::EmptyQuery);
        }
        let base_url = self.base_url.as_deref().ok_or_else(|| {
            SearchServiceError::NotConfigured("search.base_url is not set".to_string())
        })?;

        info!("Searching '{}' via {}", query, base_url);
        searxng::search(&self.client, base_url, query, options).await
    }

    async fn crawl_pages(&self, urls: &[String]) -> Result<CrawlPagesResponse, SearchServiceError> {
        debug!("Crawling {} page(s)", urls.len());
        let results = join_all(
            urls.iter()
                .map(|url| crawl::crawl_page(&self.client, url, self.limits)),
        )
        .await;

        Ok(CrawlPagesResponse { results })
    }
}
