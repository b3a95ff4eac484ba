//! Tool argument parsing
//!
//! Model-produced argument strings are frequently malformed. Parsing is
//! lenient at both levels: anything that does not decode to a JSON value
//! (including an empty string or `null`) becomes an empty object, and every
//! field of the typed views falls back to its default when it is missing or
//! has the wrong shape. Rejecting an unusable value (such as an empty query)
//! is left to the service that receives it.

use crate::search::{SearchOptions, SearchTimeRange};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Parse an argument string, falling back to `{}`.
pub fn parse_arguments(raw: &str) -> serde_json::Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Null) | Err(_) => serde_json::Value::Object(Default::default()),
        Ok(value) => value,
    }
}

/// Decode parsed arguments into a typed view.
///
/// Non-object arguments decode to the view's default.
pub fn decode_arguments<T: DeserializeOwned + Default>(args: &serde_json::Value) -> T {
    T::deserialize(args).unwrap_or_default()
}

/// Deserialize a field, substituting its default for a value of the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Arguments of `search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArgs {
    #[serde(default, deserialize_with = "lenient")]
    pub query: String,
    #[serde(default, deserialize_with = "lenient")]
    pub search_categories: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub search_engines: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub search_time_range: Option<SearchTimeRange>,
}

impl SearchArgs {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            search_categories: self.search_categories.clone(),
            search_engines: self.search_engines.clone(),
            search_time_range: self.search_time_range,
        }
    }
}

/// Arguments of `crawlSinglePage`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlSinglePageArgs {
    #[serde(default, deserialize_with = "lenient")]
    pub url: String,
}

/// Arguments of `crawlMultiPages`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlMultiPagesArgs {
    #[serde(default, deserialize_with = "lenient")]
    pub urls: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_object() {
        assert_eq!(parse_arguments(r#"{"query":"rust"}"#), json!({ "query": "rust" }));
    }

    #[test]
    fn test_parse_malformed_falls_back_to_empty_object() {
        assert_eq!(parse_arguments("{not json"), json!({}));
        assert_eq!(parse_arguments(""), json!({}));
        assert_eq!(parse_arguments("null"), json!({}));
    }

    #[test]
    fn test_decode_search_args() {
        let args = parse_arguments(
            r#"{"query":"rust","searchEngines":["bing"],"searchTimeRange":"week"}"#,
        );
        let search: SearchArgs = decode_arguments(&args);
        assert_eq!(search.query, "rust");
        let options = search.options();
        assert_eq!(options.search_engines, Some(vec!["bing".to_string()]));
        assert_eq!(options.search_categories, None);
        assert_eq!(options.search_time_range, Some(SearchTimeRange::Week));
    }

    #[test]
    fn test_decode_unknown_time_range_is_dropped() {
        let args = parse_arguments(r#"{"query":"rust","searchTimeRange":"decade"}"#);
        let search: SearchArgs = decode_arguments(&args);
        assert_eq!(search.query, "rust");
        assert_eq!(search.search_time_range, None);
    }

    #[test]
    fn test_decode_scalar_engine_list_is_dropped() {
        let args = parse_arguments(r#"{"query":"rust","searchEngines":"bing","searchCategories":[1,2]}"#);
        let search: SearchArgs = decode_arguments(&args);
        assert_eq!(search.query, "rust");
        assert_eq!(search.search_engines, None);
        assert_eq!(search.search_categories, None);
    }

    #[test]
    fn test_decode_missing_query_defaults_to_empty() {
        let search: SearchArgs = decode_arguments(&parse_arguments("{oops"));
        assert_eq!(search, SearchArgs::default());

        let search: SearchArgs = decode_arguments(&json!({ "query": 42 }));
        assert_eq!(search.query, "");
    }

    #[test]
    fn test_decode_missing_url_defaults_to_empty() {
        let single: CrawlSinglePageArgs = decode_arguments(&json!({}));
        assert_eq!(single.url, "");

        let single: CrawlSinglePageArgs = decode_arguments(&json!(["https://a.example"]));
        assert_eq!(single.url, "");
    }

    #[test]
    fn test_decode_multi_pages_defaults_to_empty() {
        let args = parse_arguments("garbage");
        let multi: CrawlMultiPagesArgs = decode_arguments(&args);
        assert!(multi.urls.is_empty());

        let multi: CrawlMultiPagesArgs = decode_arguments(&json!({ "urls": "https://a.example" }));
        assert!(multi.urls.is_empty());
    }
}
