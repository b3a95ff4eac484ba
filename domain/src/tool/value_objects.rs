//! Tool domain value objects — the result envelope
//!
//! Every dispatched operation produces a [`ToolExecutionResult`]. The
//! envelope keeps `content` populated in both outcomes so that the chat
//! layer can always hand something readable back to the model:
//!
//! | Outcome | `success` | `content` | `error` | `state` |
//! |---------|:---:|-----------|---------|---------|
//! | success | `true` | operation output | `None` | raw payload (optional) |
//! | failure | `false` | error message | `Some(..)` | raw payload (optional) |

use serde::{Deserialize, Serialize};

/// Uniform result of a builtin tool invocation.
///
/// `success == false` if and only if `error` is present. Build values with
/// [`success`](Self::success), [`failure`](Self::failure) or
/// [`failure_with`](Self::failure_with) to keep that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolExecutionResult {
    /// Whether the execution was successful
    pub success: bool,
    /// Human/LLM-readable summary; the error message on failure
    pub content: String,
    /// Capability-specific raw payload for downstream consumers
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<serde_json::Value>,
    /// Error detail, present only on failure
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<serde_json::Value>,
}

impl ToolExecutionResult {
    /// Create a successful result
    pub fn success(content: impl Into<String>, state: Option<serde_json::Value>) -> Self {
        Self {
            success: true,
            content: content.into(),
            state,
            error: None,
        }
    }

    /// Create a failed result whose error detail is `{ "message": .. }`
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            error: Some(serde_json::json!({ "message": message })),
            content: message,
            state: None,
        }
    }

    /// Create a failed result carrying a domain-specific error payload
    pub fn failure_with(
        content: impl Into<String>,
        error: serde_json::Value,
        state: Option<serde_json::Value>,
    ) -> Self {
        Self {
            success: false,
            content: content.into(),
            state,
            error: Some(error),
        }
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The error message, if the error detail carries one
    pub fn error_message(&self) -> Option<&str> {
        let error = self.error.as_ref()?;
        error
            .get("message")
            .or_else(|| error.get("errorMessage"))
            .and_then(|v| v.as_str())
    }
}
