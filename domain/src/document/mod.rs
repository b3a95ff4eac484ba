//! Document domain module
//!
//! A loaded document is an ordered list of [`Page`]s. Loading never fails
//! from the caller's point of view: a document that cannot be opened or
//! parsed is represented by a single synthetic page whose
//! [`PageMetadata::error`] describes the failure.
//!
//! ```text
//! path ──▶ DocumentLoaderPort::load_pages ──▶ Vec<Page> ──▶ aggregate_content ──▶ String
//!                                              (len ≥ 1)      (joined by "\n\n")
//! ```
//!
//! The loader itself is an infrastructure adapter; this module only holds the
//! page shape and the pure aggregation step.

pub mod entities;

pub use entities::{LOAD_FAILURE_PREFIX, PAGE_SEPARATOR, Page, PageMetadata, aggregate_content};
