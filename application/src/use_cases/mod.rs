//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod builtin_tools;
pub(crate) mod tool_helpers;
pub mod web_browsing;
