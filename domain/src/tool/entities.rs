//! Tool domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A single builtin tool invocation as received from the chat layer.
///
/// `arguments` is the raw JSON text produced by the model; it is parsed
/// leniently at dispatch time (see [`parse_arguments`](super::arguments::parse_arguments)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolPayload {
    /// Capability name (e.g. `lobe-web-browsing`)
    pub identifier: String,
    /// Operation within the capability (e.g. `search`)
    pub api_name: String,
    /// JSON-encoded argument object
    #[serde(default)]
    pub arguments: String,
}

impl ToolPayload {
    pub fn new(
        identifier: impl Into<String>,
        api_name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            api_name: api_name.into(),
            arguments: arguments.into(),
        }
    }
}

/// Caller-supplied correlation data, passed through untouched.
///
/// The dispatcher only reads it for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolExecutionContext {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub topic_id: Option<String>,
    /// Any other keys the caller attached
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ToolExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_topic_id(mut self, topic_id: impl Into<String>) -> Self {
        self.topic_id = Some(topic_id.into());
        self
    }
}

/// Builtin capabilities the dispatcher knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinToolIdentifier {
    /// Web search and page crawling
    WebBrowsing,
}

impl BuiltinToolIdentifier {
    pub const ALL: &'static [BuiltinToolIdentifier] = &[BuiltinToolIdentifier::WebBrowsing];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinToolIdentifier::WebBrowsing => "lobe-web-browsing",
        }
    }
}

impl fmt::Display for BuiltinToolIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuiltinToolIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lobe-web-browsing" => Ok(BuiltinToolIdentifier::WebBrowsing),
            other => Err(DomainError::ToolNotImplemented(other.to_string())),
        }
    }
}

/// Operations of the web-browsing capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebBrowsingApi {
    Search,
    CrawlSinglePage,
    CrawlMultiPages,
}

impl WebBrowsingApi {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebBrowsingApi::Search => "search",
            WebBrowsingApi::CrawlSinglePage => "crawlSinglePage",
            WebBrowsingApi::CrawlMultiPages => "crawlMultiPages",
        }
    }
}

impl fmt::Display for WebBrowsingApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WebBrowsingApi {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(WebBrowsingApi::Search),
            "crawlSinglePage" => Ok(WebBrowsingApi::CrawlSinglePage),
            "crawlMultiPages" => Ok(WebBrowsingApi::CrawlMultiPages),
            other => Err(DomainError::UnsupportedWebBrowsingApi(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_parse() {
        assert_eq!(
            "lobe-web-browsing".parse::<BuiltinToolIdentifier>().unwrap(),
            BuiltinToolIdentifier::WebBrowsing
        );
        let err = "lobe-artifacts".parse::<BuiltinToolIdentifier>().unwrap_err();
        assert_eq!(err.to_string(), "Builtin tool \"lobe-artifacts\" is not implemented");
    }

    #[test]
    fn test_web_browsing_api_parse() {
        assert_eq!("search".parse::<WebBrowsingApi>().unwrap(), WebBrowsingApi::Search);
        assert_eq!(
            "crawlSinglePage".parse::<WebBrowsingApi>().unwrap(),
            WebBrowsingApi::CrawlSinglePage
        );
        assert_eq!(
            "crawlMultiPages".parse::<WebBrowsingApi>().unwrap(),
            WebBrowsingApi::CrawlMultiPages
        );
        // Names are case-sensitive
        assert!("Search".parse::<WebBrowsingApi>().is_err());
    }

    #[test]
    fn test_api_name_display_matches_parse() {
        for api in [
            WebBrowsingApi::Search,
            WebBrowsingApi::CrawlSinglePage,
            WebBrowsingApi::CrawlMultiPages,
        ] {
            assert_eq!(api.to_string().parse::<WebBrowsingApi>().unwrap(), api);
        }
    }

    #[test]
    fn test_payload_deserialize_camel_case() {
        let payload: ToolPayload = serde_json::from_str(
            r#"{"identifier":"lobe-web-browsing","apiName":"search","arguments":"{}"}"#,
        )
        .unwrap();
        assert_eq!(payload.api_name, "search");
        assert_eq!(payload.arguments, "{}");
    }

    #[test]
    fn test_context_keeps_unknown_keys() {
        let context: ToolExecutionContext =
            serde_json::from_str(r#"{"userId":"u1","messageId":"m9"}"#).unwrap();
        assert_eq!(context.user_id.as_deref(), Some("u1"));
        assert_eq!(context.topic_id, None);
        assert_eq!(context.extra["messageId"], "m9");
    }
}
