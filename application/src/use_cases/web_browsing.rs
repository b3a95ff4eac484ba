//! Web-browsing capability handler.
//!
//! Routes a [`WebBrowsingApi`] to the [`SearchServicePort`] and normalizes
//! the service response into a [`ToolExecutionResult`]:
//!
//! | API | Service call | `content` on success |
//! |-----|--------------|----------------------|
//! | `search` | `query` | JSON of the `results` array |
//! | `crawlSinglePage` | `crawl_pages([url])` | the page text |
//! | `crawlMultiPages` | `crawl_pages(urls)` | page texts joined by [`MULTI_PAGE_SEPARATOR`] |
//!
//! `crawlSinglePage` turns a per-page crawl failure into a failed envelope.
//! `crawlMultiPages` does not look at per-page failures: a failed page
//! contributes an empty segment and the call still succeeds.

use super::builtin_tools::BuiltinToolError;
use crate::ports::search_service::SearchServicePort;
use toolhost_domain::search::{CrawlPageData, CrawlPagesResponse};
use toolhost_domain::tool::{
    CrawlMultiPagesArgs, CrawlSinglePageArgs, SearchArgs, ToolExecutionResult, WebBrowsingApi,
    decode_arguments,
};
use tracing::debug;

/// Join token between pages of a multi-page crawl.
///
/// This is the literal four-character text `/n/n`, not a pair of newlines,
/// and is unrelated to the document page separator.
pub const MULTI_PAGE_SEPARATOR: &str = "/n/n";

pub(crate) async fn execute_web_browsing(
    service: &dyn SearchServicePort,
    api: WebBrowsingApi,
    args: &serde_json::Value,
) -> Result<ToolExecutionResult, BuiltinToolError> {
    match api {
        WebBrowsingApi::Search => search(service, decode_arguments(args)).await,
        WebBrowsingApi::CrawlSinglePage => crawl_single_page(service, decode_arguments(args)).await,
        WebBrowsingApi::CrawlMultiPages => crawl_multi_pages(service, decode_arguments(args)).await,
    }
}

async fn search(
    service: &dyn SearchServicePort,
    args: SearchArgs,
) -> Result<ToolExecutionResult, BuiltinToolError> {
    let response = service.query(&args.query, &args.options()).await?;
    debug!(
        "Search '{}' returned {} results in {}ms",
        args.query,
        response.results.len(),
        response.cost_time
    );

    let content = serde_json::to_string(&response.results)?;
    let state = serde_json::to_value(&response)?;
    Ok(ToolExecutionResult::success(content, Some(state)))
}

async fn crawl_single_page(
    service: &dyn SearchServicePort,
    args: CrawlSinglePageArgs,
) -> Result<ToolExecutionResult, BuiltinToolError> {
    let CrawlPagesResponse { results } = service
        .crawl_pages(std::slice::from_ref(&args.url))
        .await?;

    let page = results
        .into_iter()
        .next()
        .ok_or_else(|| BuiltinToolError::EmptyCrawl(args.url.clone()))?;
    let state = serde_json::to_value(&page)?;

    match &page.data {
        CrawlPageData::Failure(failure) => Ok(ToolExecutionResult::failure_with(
            failure.error_message.clone(),
            serde_json::to_value(failure)?,
            Some(state),
        )),
        CrawlPageData::Success(success) => Ok(ToolExecutionResult::success(
            success.content.clone().unwrap_or_default(),
            Some(state),
        )),
    }
}

async fn crawl_multi_pages(
    service: &dyn SearchServicePort,
    args: CrawlMultiPagesArgs,
) -> Result<ToolExecutionResult, BuiltinToolError> {
    let CrawlPagesResponse { results } = service.crawl_pages(&args.urls).await?;

    let content = results
        .iter()
        .map(|item| item.data.content().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(MULTI_PAGE_SEPARATOR);

    let state = serde_json::to_value(&results)?;
    Ok(ToolExecutionResult::success(content, Some(state)))
}
