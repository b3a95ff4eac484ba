//! Search and crawl records exchanged with the search service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time window filter for a search query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTimeRange {
    #[default]
    Anytime,
    Day,
    Week,
    Month,
    Year,
}

impl SearchTimeRange {
    pub fn as_str(&self) -> &str {
        match self {
            SearchTimeRange::Anytime => "anytime",
            SearchTimeRange::Day => "day",
            SearchTimeRange::Week => "week",
            SearchTimeRange::Month => "month",
            SearchTimeRange::Year => "year",
        }
    }
}

impl fmt::Display for SearchTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchTimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anytime" => Ok(SearchTimeRange::Anytime),
            "day" => Ok(SearchTimeRange::Day),
            "week" => Ok(SearchTimeRange::Week),
            "month" => Ok(SearchTimeRange::Month),
            "year" => Ok(SearchTimeRange::Year),
            other => Err(format!("Unknown search time range: {}", other)),
        }
    }
}

/// Options forwarded to the search service alongside the query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_engines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_time_range: Option<SearchTimeRange>,
}

/// One normalized search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub engines: Vec<String>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub parsed_url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub img_src: Option<String>,
}

/// Full response of a search query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    /// Wall-clock time spent by the service, in milliseconds
    pub cost_time: u64,
    pub result_numbers: usize,
    pub results: Vec<SearchResultItem>,
}

/// Content extracted from a successfully crawled page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlSuccess {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
    #[serde(default)]
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub length: Option<usize>,
    #[serde(default)]
    pub url: String,
}

/// Failure report for a page that could not be crawled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlFailure {
    pub error_message: String,
    #[serde(default)]
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
}

/// Per-page crawl payload.
///
/// Serialized untagged: a failure is recognised by the presence of
/// `errorMessage`, so `Failure` must stay the first variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CrawlPageData {
    Failure(CrawlFailure),
    Success(CrawlSuccess),
}

impl CrawlPageData {
    pub fn content(&self) -> Option<&str> {
        match self {
            CrawlPageData::Success(success) => success.content.as_deref(),
            CrawlPageData::Failure(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            CrawlPageData::Failure(failure) => Some(&failure.error_message),
            CrawlPageData::Success(_) => None,
        }
    }
}

/// Result of crawling a single URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    /// Name of the crawler implementation that produced the data
    pub crawler: String,
    pub original_url: String,
    pub data: CrawlPageData,
}

impl CrawlResult {
    pub fn success(crawler: impl Into<String>, original_url: impl Into<String>, data: CrawlSuccess) -> Self {
        Self {
            crawler: crawler.into(),
            original_url: original_url.into(),
            data: CrawlPageData::Success(data),
        }
    }

    pub fn failure(crawler: impl Into<String>, original_url: impl Into<String>, data: CrawlFailure) -> Self {
        Self {
            crawler: crawler.into(),
            original_url: original_url.into(),
            data: CrawlPageData::Failure(data),
        }
    }
}

/// Response of a crawl request, one entry per requested URL in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlPagesResponse {
    pub results: Vec<CrawlResult>,
}
