//! Builtin tools executor use case.
//!
//! [`BuiltinToolsExecutor`] is the dispatcher for builtin tool invocations:
//!
//! ```text
//! ToolPayload
//!   ├─ parse_arguments()             (lenient: malformed JSON → {})
//!   ├─ identifier → BuiltinToolIdentifier
//!   │    └─ WebBrowsing → api_name → WebBrowsingApi → SearchServicePort
//!   └─ any error ──────────────────▶ ToolExecutionResult::failure(message)
//! ```
//!
//! Errors are caught exactly once, in [`ToolExecutorPort::execute`]; the
//! handlers below it return `Result` and propagate with `?`.

use super::tool_helpers::tool_args_preview;
use super::web_browsing::execute_web_browsing;
use crate::ports::search_service::{SearchServiceError, SearchServicePort};
use crate::ports::tool_executor::ToolExecutorPort;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use toolhost_domain::DomainError;
use toolhost_domain::tool::{
    BuiltinToolIdentifier, ToolExecutionContext, ToolExecutionResult, ToolPayload, WebBrowsingApi,
    parse_arguments,
};
use tracing::{debug, warn};

/// Errors that can occur while dispatching a builtin tool.
///
/// Only the `Display` text reaches the caller, as the failure envelope's
/// `content` and `error.message`.
#[derive(Error, Debug)]
pub enum BuiltinToolError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Search(#[from] SearchServiceError),

    #[error("Crawl returned no result for {0}")]
    EmptyCrawl(String),

    #[error("Failed to encode tool result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Executor for builtin (in-process) tools.
pub struct BuiltinToolsExecutor {
    search_service: Arc<dyn SearchServicePort>,
}

impl Clone for BuiltinToolsExecutor {
    fn clone(&self) -> Self {
        Self {
            search_service: self.search_service.clone(),
        }
    }
}

impl BuiltinToolsExecutor {
    pub fn new(search_service: Arc<dyn SearchServicePort>) -> Self {
        Self { search_service }
    }

    /// Identifiers this executor routes
    pub fn identifiers(&self) -> &'static [BuiltinToolIdentifier] {
        BuiltinToolIdentifier::ALL
    }

    async fn dispatch(
        &self,
        payload: &ToolPayload,
        args: &serde_json::Value,
    ) -> Result<ToolExecutionResult, BuiltinToolError> {
        let identifier: BuiltinToolIdentifier = payload.identifier.parse()?;
        match identifier {
            BuiltinToolIdentifier::WebBrowsing => {
                let api: WebBrowsingApi = payload.api_name.parse()?;
                execute_web_browsing(self.search_service.as_ref(), api, args).await
            }
        }
    }
}

#[async_trait]
impl ToolExecutorPort for BuiltinToolsExecutor {
    fn supports(&self, identifier: &str) -> bool {
        self.identifiers().iter().any(|id| id.as_str() == identifier)
    }

    async fn execute(
        &self,
        payload: &ToolPayload,
        context: &ToolExecutionContext,
    ) -> ToolExecutionResult {
        let args = parse_arguments(&payload.arguments);
        debug!(
            "Executing builtin tool: {}:{} ({}) context={:?}",
            payload.identifier,
            payload.api_name,
            tool_args_preview(&args),
            context
        );

        match self.dispatch(payload, &args).await {
            Ok(result) => {
                if !result.is_success() {
                    debug!(
                        "Builtin tool {}:{} reported failure: {}",
                        payload.identifier, payload.api_name, result.content
                    );
                }
                result
            }
            // Unknown identifier or API name: a lookup miss, not a fault
            Err(e @ BuiltinToolError::Domain(_)) => {
                debug!("{}", e);
                ToolExecutionResult::failure(e.to_string())
            }
            Err(e) => {
                warn!(
                    "Error executing builtin tool {}:{}: {}",
                    payload.identifier, payload.api_name, e
                );
                ToolExecutionResult::failure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::web_browsing::MULTI_PAGE_SEPARATOR;
    use serde_json::json;
    use std::sync::Mutex;
    use toolhost_domain::search::{
        CrawlFailure, CrawlPagesResponse, CrawlResult, CrawlSuccess, SearchOptions,
        SearchResponse, SearchResultItem,
    };

    /// Recorded call to the mock search service
    #[derive(Debug, Clone, PartialEq)]
    enum ServiceCall {
        Query(String, SearchOptions),
        Crawl(Vec<String>),
    }

    struct MockSearchService {
        calls: Mutex<Vec<ServiceCall>>,
        search_response: SearchResponse,
        /// Content per URL; `None` means the page fails with "timeout"
        pages: Vec<(String, Option<String>)>,
        fail_requests: bool,
        /// Answer crawls with `results: []`
        empty_crawl: bool,
    }

    impl MockSearchService {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                search_response: SearchResponse::default(),
                pages: Vec::new(),
                fail_requests: false,
                empty_crawl: false,
            }
        }

        fn with_search_results(mut self, results: Vec<SearchResultItem>) -> Self {
            self.search_response = SearchResponse {
                query: "rust".to_string(),
                cost_time: 12,
                result_numbers: results.len(),
                results,
            };
            self
        }

        fn with_page(mut self, url: &str, content: Option<&str>) -> Self {
            self.pages
                .push((url.to_string(), content.map(|c| c.to_string())));
            self
        }

        fn failing() -> Self {
            Self {
                fail_requests: true,
                ..Self::new()
            }
        }

        fn empty_crawl() -> Self {
            Self {
                empty_crawl: true,
                ..Self::new()
            }
        }

        fn calls(&self) -> Vec<ServiceCall> {
            self.calls.lock().unwrap().clone()
        }

        fn crawl_result(&self, url: &str) -> CrawlResult {
            match self.pages.iter().find(|(u, _)| u == url) {
                Some((_, Some(content))) => CrawlResult::success(
                    "mock",
                    url,
                    CrawlSuccess {
                        content: Some(content.clone()),
                        content_type: "text".to_string(),
                        url: url.to_string(),
                        ..Default::default()
                    },
                ),
                _ => CrawlResult::failure("mock", url, timeout_failure(url)),
            }
        }
    }

    fn timeout_failure(url: &str) -> CrawlFailure {
        CrawlFailure {
            error_message: "timeout".to_string(),
            error_type: "RequestFailed".to_string(),
            url: Some(url.to_string()),
        }
    }

    #[async_trait]
    impl SearchServicePort for MockSearchService {
        async fn query(
            &self,
            query: &str,
            options: &SearchOptions,
        ) -> Result<SearchResponse, SearchServiceError> {
            self.calls
                .lock()
                .unwrap()
                .push(ServiceCall::Query(query.to_string(), options.clone()));
            if query.trim().is_empty() {
                return Err(SearchServiceError::EmptyQuery);
            }
            if self.fail_requests {
                return Err(SearchServiceError::RequestFailed("connection refused".into()));
            }
            Ok(self.search_response.clone())
        }

        async fn crawl_pages(
            &self,
            urls: &[String],
        ) -> Result<CrawlPagesResponse, SearchServiceError> {
            self.calls
                .lock()
                .unwrap()
                .push(ServiceCall::Crawl(urls.to_vec()));
            if self.fail_requests {
                return Err(SearchServiceError::RequestFailed("connection refused".into()));
            }
            if self.empty_crawl {
                return Ok(CrawlPagesResponse::default());
            }
            Ok(CrawlPagesResponse {
                results: urls.iter().map(|u| self.crawl_result(u)).collect(),
            })
        }
    }

    fn make_executor(service: MockSearchService) -> (BuiltinToolsExecutor, Arc<MockSearchService>) {
        let service = Arc::new(service);
        (BuiltinToolsExecutor::new(service.clone()), service)
    }

    fn web(api_name: &str, arguments: &str) -> ToolPayload {
        ToolPayload::new("lobe-web-browsing", api_name, arguments)
    }

    fn item(title: &str, url: &str) -> SearchResultItem {
        SearchResultItem {
            title: title.to_string(),
            url: url.to_string(),
            content: format!("about {}", title),
            engines: vec!["bing".to_string()],
            score: 1.0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_unknown_identifier_fails() {
        let (executor, service) = make_executor(MockSearchService::new());
        let payload = ToolPayload::new("lobe-image-designer", "generate", "{}");

        let result = executor.execute(&payload, &ToolExecutionContext::new()).await;

        assert!(!result.is_success());
        assert_eq!(
            result.content,
            "Builtin tool \"lobe-image-designer\" is not implemented"
        );
        assert_eq!(
            result.error,
            Some(json!({ "message": "Builtin tool \"lobe-image-designer\" is not implemented" }))
        );
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_api_fails() {
        let (executor, service) = make_executor(MockSearchService::new());

        let result = executor
            .execute(&web("screenshot", "{}"), &ToolExecutionContext::new())
            .await;

        assert!(!result.is_success());
        assert_eq!(result.content, "Web browsing API \"screenshot\" is not supported");
        assert_eq!(result.error_message(), Some(result.content.as_str()));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_returns_results_json() {
        let results = vec![item("Rust", "https://rust-lang.org"), item("Tokio", "https://tokio.rs")];
        let (executor, service) =
            make_executor(MockSearchService::new().with_search_results(results.clone()));

        let payload = web(
            "search",
            r#"{"query":"rust","searchEngines":["bing"],"searchTimeRange":"month"}"#,
        );
        let result = executor.execute(&payload, &ToolExecutionContext::new()).await;

        assert!(result.is_success());
        assert_eq!(result.content, serde_json::to_string(&results).unwrap());
        assert!(result.error.is_none());
        let state = result.state.unwrap();
        assert_eq!(state["costTime"], 12);
        assert_eq!(state["results"].as_array().unwrap().len(), 2);

        let calls = service.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            ServiceCall::Query(query, options) => {
                assert_eq!(query, "rust");
                assert_eq!(options.search_engines, Some(vec!["bing".to_string()]));
                assert_eq!(options.search_categories, None);
                assert_eq!(
                    options.search_time_range,
                    Some(toolhost_domain::SearchTimeRange::Month)
                );
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_service_error_becomes_failure() {
        let (executor, _) = make_executor(MockSearchService::failing());

        let result = executor
            .execute(&web("search", r#"{"query":"rust"}"#), &ToolExecutionContext::new())
            .await;

        assert!(!result.is_success());
        assert_eq!(result.content, "Search request failed: connection refused");
        assert_eq!(result.error_message(), Some("Search request failed: connection refused"));
    }

    #[tokio::test]
    async fn test_malformed_arguments_do_not_fail_dispatch() {
        // Malformed JSON becomes {}, so no URLs are crawled
        let (executor, service) = make_executor(MockSearchService::new());

        let result = executor
            .execute(&web("crawlMultiPages", "{oops"), &ToolExecutionContext::new())
            .await;

        assert!(result.is_success());
        assert_eq!(result.content, "");
        assert_eq!(result.state, Some(json!([])));
        assert_eq!(service.calls(), vec![ServiceCall::Crawl(vec![])]);
    }

    #[tokio::test]
    async fn test_missing_query_reaches_service() {
        let (executor, service) = make_executor(MockSearchService::new());

        let result = executor
            .execute(&web("search", "not json"), &ToolExecutionContext::new())
            .await;

        assert!(!result.is_success());
        assert_eq!(result.content, "Search query is empty");
        assert_eq!(
            service.calls(),
            vec![ServiceCall::Query(String::new(), SearchOptions::default())]
        );
    }

    #[tokio::test]
    async fn test_unrecognized_search_options_are_dropped() {
        let (executor, service) = make_executor(
            MockSearchService::new().with_search_results(vec![item("Rust", "https://rust-lang.org")]),
        );

        for arguments in [
            r#"{"query":"rust","searchTimeRange":"decade"}"#,
            r#"{"query":"rust","searchEngines":"bing"}"#,
        ] {
            let result = executor
                .execute(&web("search", arguments), &ToolExecutionContext::new())
                .await;
            assert!(result.is_success(), "{}: {}", arguments, result.content);
        }

        assert_eq!(
            service.calls(),
            vec![
                ServiceCall::Query("rust".to_string(), SearchOptions::default()),
                ServiceCall::Query("rust".to_string(), SearchOptions::default()),
            ]
        );
    }

    #[tokio::test]
    async fn test_crawl_single_page_without_url_reaches_service() {
        let (executor, service) = make_executor(MockSearchService::new());

        let result = executor
            .execute(&web("crawlSinglePage", "{}"), &ToolExecutionContext::new())
            .await;

        assert!(!result.is_success());
        assert_eq!(service.calls(), vec![ServiceCall::Crawl(vec![String::new()])]);
    }

    #[tokio::test]
    async fn test_crawl_single_page_empty_results() {
        let (executor, service) = make_executor(MockSearchService::empty_crawl());

        let result = executor
            .execute(
                &web("crawlSinglePage", r#"{"url":"https://x.example"}"#),
                &ToolExecutionContext::new(),
            )
            .await;

        assert!(!result.is_success());
        assert_eq!(result.content, "Crawl returned no result for https://x.example");
        assert_eq!(
            result.error_message(),
            Some("Crawl returned no result for https://x.example")
        );
        assert!(result.state.is_none());
        assert_eq!(
            service.calls(),
            vec![ServiceCall::Crawl(vec!["https://x.example".to_string()])]
        );
    }

    #[tokio::test]
    async fn test_crawl_single_page_success() {
        let (executor, service) = make_executor(
            MockSearchService::new().with_page("https://example.com", Some("Example body")),
        );

        let result = executor
            .execute(
                &web("crawlSinglePage", r#"{"url":"https://example.com"}"#),
                &ToolExecutionContext::new(),
            )
            .await;

        assert!(result.is_success());
        assert_eq!(result.content, "Example body");
        let state = result.state.unwrap();
        assert_eq!(state["originalUrl"], "https://example.com");
        assert_eq!(state["data"]["content"], "Example body");
        assert_eq!(
            service.calls(),
            vec![ServiceCall::Crawl(vec!["https://example.com".to_string()])]
        );
    }

    #[tokio::test]
    async fn test_crawl_single_page_error_message() {
        let (executor, _) = make_executor(MockSearchService::new());

        let result = executor
            .execute(
                &web("crawlSinglePage", r#"{"url":"https://slow.example"}"#),
                &ToolExecutionContext::new(),
            )
            .await;

        assert!(!result.is_success());
        assert_eq!(result.content, "timeout");
        assert_eq!(
            result.error,
            Some(serde_json::to_value(timeout_failure("https://slow.example")).unwrap())
        );
        let state = result.state.unwrap();
        assert_eq!(state["data"]["errorMessage"], "timeout");
    }

    #[tokio::test]
    async fn test_crawl_multi_pages_joins_with_literal_token() {
        let (executor, _) = make_executor(
            MockSearchService::new()
                .with_page("https://a.example", Some("A"))
                .with_page("https://b.example", Some("B")),
        );

        let result = executor
            .execute(
                &web(
                    "crawlMultiPages",
                    r#"{"urls":["https://a.example","https://b.example"]}"#,
                ),
                &ToolExecutionContext::new(),
            )
            .await;

        assert!(result.is_success());
        // Literal "/n/n", not a pair of newlines
        assert_eq!(result.content, "A/n/nB");
        assert_eq!(MULTI_PAGE_SEPARATOR, "/n/n");
        assert_ne!(MULTI_PAGE_SEPARATOR, toolhost_domain::PAGE_SEPARATOR);
        assert_eq!(result.state.unwrap().as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_crawl_multi_pages_ignores_page_failures() {
        // Known asymmetry with crawlSinglePage: a failed page is an empty
        // segment and the call still reports success.
        let (executor, _) = make_executor(
            MockSearchService::new()
                .with_page("https://a.example", Some("A"))
                .with_page("https://c.example", Some("C")),
        );

        let result = executor
            .execute(
                &web(
                    "crawlMultiPages",
                    r#"{"urls":["https://a.example","https://down.example","https://c.example"]}"#,
                ),
                &ToolExecutionContext::new(),
            )
            .await;

        assert!(result.is_success());
        assert!(result.error.is_none());
        assert_eq!(result.content, "A/n/n/n/nC");
        let state = result.state.unwrap();
        assert_eq!(state[1]["data"]["errorMessage"], "timeout");
    }

    #[tokio::test]
    async fn test_context_is_passed_through_untouched() {
        let (executor, _) =
            make_executor(MockSearchService::new().with_page("https://a.example", Some("A")));
        let context = ToolExecutionContext::new()
            .with_user_id("user-1")
            .with_topic_id("topic-9");

        let result = executor
            .execute(
                &web("crawlSinglePage", r#"{"url":"https://a.example"}"#),
                &context,
            )
            .await;

        assert!(result.is_success());
        assert_eq!(context.user_id.as_deref(), Some("user-1"));
    }

    #[test]
    fn test_supports() {
        let (executor, _) = make_executor(MockSearchService::new());
        assert!(executor.supports("lobe-web-browsing"));
        assert!(!executor.supports("lobe-artifacts"));
        assert!(!executor.supports(""));
        assert_eq!(executor.identifiers(), &[BuiltinToolIdentifier::WebBrowsing]);
    }
}
