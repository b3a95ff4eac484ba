//! Tool Executor port
//!
//! Defines the interface for executing builtin tool invocations.

use async_trait::async_trait;
use toolhost_domain::tool::{ToolExecutionContext, ToolExecutionResult, ToolPayload};

/// Port for tool execution
///
/// `execute` never returns an error: every failure is folded into a
/// [`ToolExecutionResult`] with `success == false`.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Check if this executor handles the given tool identifier
    fn supports(&self, identifier: &str) -> bool;

    /// Execute a tool invocation
    async fn execute(
        &self,
        payload: &ToolPayload,
        context: &ToolExecutionContext,
    ) -> ToolExecutionResult;
}
