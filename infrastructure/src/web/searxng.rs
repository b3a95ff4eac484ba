//! SearXNG JSON API client.
//!
//! Issues `GET {base_url}/search?q=..&format=json` and maps the SearXNG
//! result records onto [`SearchResultItem`]s.
//!
//! # Parameters
//!
//! | Query param | Source |
//! |-------------|--------|
//! | `q` | the query string |
//! | `format` | always `json` |
//! | `categories` | `searchCategories`, comma-joined |
//! | `engines` | `searchEngines`, comma-joined |
//! | `time_range` | `searchTimeRange`, omitted for `anytime` |
//!
//! The SearXNG instance must have the JSON output format enabled
//! (`search.formats` in its `settings.yml`).

use serde::Deserialize;
use std::time::Instant;
use toolhost_application::SearchServiceError;
use toolhost_domain::search::{SearchOptions, SearchResponse, SearchResultItem, SearchTimeRange};

/// Raw SearXNG response body (only the fields we use)
#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    results: Vec<RawResult>,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    engine: Option<String>,
    #[serde(default)]
    engines: Vec<String>,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, rename = "publishedDate")]
    published_date: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    img_src: Option<String>,
}

impl From<RawResult> for SearchResultItem {
    fn from(raw: RawResult) -> Self {
        let engines = if raw.engines.is_empty() {
            raw.engine.into_iter().collect()
        } else {
            raw.engines
        };
        Self {
            parsed_url: host_of(&raw.url),
            title: raw.title,
            url: raw.url,
            content: raw.content,
            engines,
            score: raw.score,
            category: raw.category,
            published_date: raw.published_date.filter(|s| !s.is_empty()),
            thumbnail: raw.thumbnail.filter(|s| !s.is_empty()),
            img_src: raw.img_src.filter(|s| !s.is_empty()),
        }
    }
}

/// Hostname of `url`, or an empty string when it does not parse.
fn host_of(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// Build the query-string pairs for a search request.
pub(crate) fn query_params(query: &str, options: &SearchOptions) -> Vec<(&'static str, String)> {
    let mut params = vec![("q", query.to_string()), ("format", "json".to_string())];

    if let Some(categories) = options.search_categories.as_ref().filter(|c| !c.is_empty()) {
        params.push(("categories", categories.join(",")));
    }
    if let Some(engines) = options.search_engines.as_ref().filter(|e| !e.is_empty()) {
        params.push(("engines", engines.join(",")));
    }
    match options.search_time_range {
        None | Some(SearchTimeRange::Anytime) => {}
        Some(range) => params.push(("time_range", range.as_str().to_string())),
    }

    params
}

/// Parse a SearXNG JSON body into a [`SearchResponse`].
pub(crate) fn parse_response(
    query: &str,
    body: &str,
    cost_time: u64,
) -> Result<SearchResponse, SearchServiceError> {
    let raw: RawResponse = serde_json::from_str(body)
        .map_err(|e| SearchServiceError::InvalidResponse(e.to_string()))?;

    let results: Vec<SearchResultItem> = raw.results.into_iter().map(Into::into).collect();
    Ok(SearchResponse {
        query: query.to_string(),
        cost_time,
        result_numbers: results.len(),
        results,
    })
}

/// Run `query` against the SearXNG instance at `base_url`.
pub(crate) async fn search(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
    options: &SearchOptions,
) -> Result<SearchResponse, SearchServiceError> {
    let start = Instant::now();
    let endpoint = format!("{}/search", base_url.trim_end_matches('/'));

    let response = client
        .get(&endpoint)
        .query(&query_params(query, options))
        .send()
        .await
        .map_err(|e| SearchServiceError::RequestFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchServiceError::Http {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| SearchServiceError::RequestFailed(e.to_string()))?;

    parse_response(query, &body, start.elapsed().as_millis() as u64)
}
