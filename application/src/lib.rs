//! Application layer for toolhost
//!
//! This crate contains the port definitions and the builtin tool dispatcher.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    document_loader::DocumentLoaderPort,
    search_service::{SearchServiceError, SearchServicePort},
    tool_executor::ToolExecutorPort,
};
pub use use_cases::builtin_tools::{BuiltinToolError, BuiltinToolsExecutor};
pub use use_cases::web_browsing::MULTI_PAGE_SEPARATOR;
