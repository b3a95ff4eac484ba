//! Shared helpers for tool use cases.

use toolhost_domain::util::preview;

/// Extract a short preview string from parsed tool arguments.
///
/// Looks for well-known keys (`query`, `url`, `urls`) first, then falls back
/// to the first string value found.
pub(crate) fn tool_args_preview(args: &serde_json::Value) -> String {
    for key in ["query", "url"] {
        if let Some(serde_json::Value::String(s)) = args.get(key) {
            return preview(s, 50);
        }
    }
    if let Some(serde_json::Value::Array(urls)) = args.get("urls") {
        let first = urls.first().and_then(|v| v.as_str()).unwrap_or("");
        return match urls.len() {
            0 => String::new(),
            1 => preview(first, 50),
            n => format!("{} (+{} more)", preview(first, 50), n - 1),
        };
    }
    // Fallback: first string value
    args.as_object()
        .and_then(|map| map.values().find_map(|v| v.as_str()))
        .map(|s| preview(s, 50))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preview_prefers_query() {
        let args = json!({ "searchEngines": ["bing"], "query": "rust async" });
        assert_eq!(tool_args_preview(&args), "rust async");
    }

    #[test]
    fn test_preview_multiple_urls() {
        let args = json!({ "urls": ["https://a.example", "https://b.example", "https://c.example"] });
        assert_eq!(tool_args_preview(&args), "https://a.example (+2 more)");
    }

    #[test]
    fn test_preview_fallback_and_empty() {
        assert_eq!(tool_args_preview(&json!({ "other": "value" })), "value");
        assert_eq!(tool_args_preview(&json!({})), "");
        assert_eq!(tool_args_preview(&json!({ "urls": [] })), "");
    }
}
