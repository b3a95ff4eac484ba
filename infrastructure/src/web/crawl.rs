//! Naive page crawler: fetch a URL and extract readable text.
//!
//! Every outcome is reported as a [`CrawlResult`]; failures carry an
//! `errorType` of `InvalidUrl`, `Timeout`, `RequestFailed`, `HttpError` or
//! `ResponseTooLarge`.

use scraper::{ElementRef, Html, Node, Selector};
use toolhost_domain::search::{CrawlFailure, CrawlResult, CrawlSuccess};
use toolhost_domain::util::truncate_str;
use tracing::debug;

/// Name reported in [`CrawlResult::crawler`]
pub const CRAWLER_NAME: &str = "naive";

/// Subtrees that never contribute text
const SKIP_TAGS: &[&str] = &["head", "script", "style", "noscript", "svg", "template"];

/// Elements rendered on their own line
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Size limits applied to a single crawl
#[derive(Debug, Clone, Copy)]
pub(crate) struct CrawlLimits {
    /// Max bytes of extracted text kept
    pub max_length: usize,
    /// Max bytes of response body accepted
    pub max_body_size: usize,
}

pub(crate) async fn crawl_page(
    client: &reqwest::Client,
    url: &str,
    limits: CrawlLimits,
) -> CrawlResult {
    match fetch_page(client, url, limits).await {
        Ok(success) => CrawlResult::success(CRAWLER_NAME, url, success),
        Err(failure) => {
            debug!(
                "Crawl of {} failed ({}): {}",
                url, failure.error_type, failure.error_message
            );
            CrawlResult::failure(CRAWLER_NAME, url, failure)
        }
    }
}

fn failure(error_type: &str, url: &str, message: impl Into<String>) -> CrawlFailure {
    CrawlFailure {
        error_message: message.into(),
        error_type: error_type.to_string(),
        url: Some(url.to_string()),
    }
}

async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    limits: CrawlLimits,
) -> Result<CrawlSuccess, CrawlFailure> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| failure("InvalidUrl", url, format!("Invalid URL: {}", e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(failure(
            "InvalidUrl",
            url,
            format!("Unsupported URL scheme: {}", parsed.scheme()),
        ));
    }

    let mut response = client.get(parsed).send().await.map_err(|e| {
        let kind = if e.is_timeout() { "Timeout" } else { "RequestFailed" };
        failure(kind, url, format!("Failed to fetch URL: {}", e))
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(failure(
            "HttpError",
            url,
            format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
        ));
    }

    let content_length = response.content_length().unwrap_or(0);
    if content_length > limits.max_body_size as u64 {
        return Err(failure(
            "ResponseTooLarge",
            url,
            format!(
                "Response too large: {} bytes (max: {} bytes)",
                content_length, limits.max_body_size
            ),
        ));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();
    let final_url = response.url().to_string();

    // Content-Length may be absent or wrong; enforce the limit while reading
    let mut body = Vec::with_capacity(content_length.min(limits.max_body_size as u64) as usize);
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| failure("RequestFailed", url, format!("Failed to read response body: {}", e)))?
    {
        if body.len() + chunk.len() > limits.max_body_size {
            return Err(failure(
                "ResponseTooLarge",
                url,
                format!(
                    "Response too large: more than {} bytes",
                    limits.max_body_size
                ),
            ));
        }
        body.extend_from_slice(&chunk);
    }

    let body = String::from_utf8_lossy(&body);
    let mut page = if content_type.contains("text/html") || content_type.contains("application/xhtml")
    {
        extract_html(&body)
    } else if content_type.contains("json") {
        CrawlSuccess {
            content: Some(body.into_owned()),
            content_type: "json".to_string(),
            ..Default::default()
        }
    } else {
        CrawlSuccess {
            content: Some(body.into_owned()),
            content_type: "text".to_string(),
            ..Default::default()
        }
    };

    page.url = final_url;
    if let Some(content) = page.content.take() {
        let content = truncate_content(content, limits.max_length);
        page.length = Some(content.chars().count());
        page.content = Some(content);
    }
    Ok(page)
}

fn truncate_content(text: String, max_length: usize) -> String {
    if text.len() <= max_length {
        return text;
    }
    format!(
        "{}\n\n[... truncated at {} bytes, total: {} bytes]",
        truncate_str(&text, max_length),
        max_length,
        text.len()
    )
}

/// Extract title, description, site name and readable text from an HTML page.
pub(crate) fn extract_html(html: &str) -> CrawlSuccess {
    let document = Html::parse_document(html);

    let title = select_first(&document, "title")
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty());
    let description = meta_content(&document, r#"meta[name="description"]"#)
        .or_else(|| meta_content(&document, r#"meta[property="og:description"]"#));
    let site_name = meta_content(&document, r#"meta[property="og:site_name"]"#);

    let root = select_first(&document, "body").unwrap_or_else(|| document.root_element());
    let mut raw = String::new();
    collect_text(root, &mut raw);

    CrawlSuccess {
        content: Some(clean_whitespace(&raw)),
        content_type: "text".to_string(),
        title,
        description,
        site_name,
        ..Default::default()
    }
}

fn select_first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    document.select(&selector).next()
}

fn meta_content(document: &Html, css: &str) -> Option<String> {
    select_first(document, css)
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Recursively append the text of `element`, one line per block element
fn collect_text(element: ElementRef<'_>, out: &mut String) {
    let tag = element.value().name();
    if SKIP_TAGS.contains(&tag) {
        return;
    }
    let block = BLOCK_TAGS.contains(&tag);
    if block {
        out.push('\n');
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }

    if block {
        out.push('\n');
    }
}

/// Collapse runs of whitespace within lines and keep at most one blank line
/// between paragraphs.
fn clean_whitespace(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut pending_blank = false;

    for line in text.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            pending_blank = !lines.is_empty();
            continue;
        }
        if pending_blank {
            lines.push(String::new());
            pending_blank = false;
        }
        lines.push(collapsed);
    }

    lines.join("\n")
}
