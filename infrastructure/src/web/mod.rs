//! **Web adapters** — search and crawl
//!
//! # Components
//!
//! | Module | Description | Key Dependency |
//! |--------|-------------|----------------|
//! | `searxng` | Query a SearXNG instance, map its JSON results | `reqwest` |
//! | `crawl` | Fetch a URL, extract readable text from HTML | `reqwest` + `scraper` |
//! | `service` | [`HttpSearchService`], the `SearchServicePort` adapter | `futures` |
//!
//! All requests share one `reqwest::Client` built from the `[search]`
//! config section (timeout and User-Agent).

mod crawl;
mod searxng;
mod service;

pub use crawl::CRAWLER_NAME;
pub use service::HttpSearchService;
