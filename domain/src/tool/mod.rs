//! Tool domain module
//!
//! This module defines the core abstractions for **builtin tool dispatch** —
//! how a tool invocation coming from the chat layer is routed to a
//! capability and normalized into a uniform result envelope.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────┐    ┌─────────────────────────┐    ┌─────────────────────┐
//! │ ToolPayload  │───▶│ BuiltinToolIdentifier   │───▶│ ToolExecutionResult │
//! │ (invocation) │    │  └─ WebBrowsingApi      │    │ (envelope)          │
//! └──────────────┘    └─────────────────────────┘    └─────────────────────┘
//! ```
//!
//! Dispatch tags are closed enums: an unknown identifier or operation name
//! parses into a [`DomainError`](crate::core::error::DomainError) whose
//! message becomes the failure envelope's content.
//!
//! # Key Types
//!
//! - [`ToolPayload`] — identifier, api name and raw JSON arguments
//! - [`ToolExecutionContext`] — opaque caller context (diagnostics only)
//! - [`ToolExecutionResult`] — `success` / `content` / `state` / `error`
//! - [`parse_arguments`] — lenient parse-or-default of the argument string
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application** (`ToolExecutorPort`, `BuiltinToolsExecutor`): dispatch
//! - **Infrastructure** (`HttpSearchService`): the search/crawl backend

pub mod arguments;
pub mod entities;
pub mod value_objects;

pub use arguments::{
    CrawlMultiPagesArgs, CrawlSinglePageArgs, SearchArgs, decode_arguments, parse_arguments,
};
pub use entities::{BuiltinToolIdentifier, ToolExecutionContext, ToolPayload, WebBrowsingApi};
pub use value_objects::ToolExecutionResult;
