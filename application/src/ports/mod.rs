//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod document_loader;
pub mod search_service;
pub mod tool_executor;
