//! Document page entities

use serde::{Deserialize, Serialize};

/// Separator placed between pages by [`aggregate_content`].
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Prefix of every load-failure message recorded in [`PageMetadata::error`].
pub const LOAD_FAILURE_PREFIX: &str = "Failed to load DOCX file";

/// Metadata attached to a single [`Page`].
///
/// Real pages carry a 1-based `page_number`; the synthetic page produced on
/// a load failure carries `error` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// 1-based page index within the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Total number of pages produced for the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    /// Path of the file the page was read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Human-readable load failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A unit of parsed document text.
///
/// `char_count` and `line_count` always describe `page_content`; use
/// [`Page::new`] to keep them in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page_content: String,
    pub char_count: usize,
    pub line_count: usize,
    pub metadata: PageMetadata,
}

impl Page {
    /// Create a page from its text, computing the counts.
    pub fn new(content: impl Into<String>, page_number: u32) -> Self {
        let page_content = content.into();
        Self {
            char_count: page_content.chars().count(),
            line_count: page_content.lines().count(),
            page_content,
            metadata: PageMetadata {
                page_number: Some(page_number),
                ..Default::default()
            },
        }
    }

    /// Create the synthetic page that stands in for a document that could
    /// not be loaded.
    pub fn load_error(cause: impl std::fmt::Display) -> Self {
        Self {
            page_content: String::new(),
            char_count: 0,
            line_count: 0,
            metadata: PageMetadata {
                error: Some(format!("{}: {}", LOAD_FAILURE_PREFIX, cause)),
                ..Default::default()
            },
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.metadata.source = Some(source.into());
        self
    }

    pub fn with_total_pages(mut self, total: u32) -> Self {
        self.metadata.total_pages = Some(total);
        self
    }

    /// Whether this page records a load failure rather than real content
    pub fn is_error(&self) -> bool {
        self.metadata.error.is_some()
    }
}

/// Join page contents with [`PAGE_SEPARATOR`], preserving order.
///
/// No page is skipped or filtered; an empty slice yields an empty string.
pub fn aggregate_content(pages: &[Page]) -> String {
    pages
        .iter()
        .map(|page| page.page_content.as_str())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR)
}
