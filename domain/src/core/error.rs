//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The `Display` output of each variant is the exact message surfaced to
/// callers in a failed [`ToolExecutionResult`](crate::tool::ToolExecutionResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Builtin tool \"{0}\" is not implemented")]
    ToolNotImplemented(String),

    #[error("Web browsing API \"{0}\" is not supported")]
    UnsupportedWebBrowsingApi(String),
}
