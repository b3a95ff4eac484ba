//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod document;
mod search;

pub use document::FileDocumentConfig;
pub use search::{
    DEFAULT_MAX_BODY_SIZE, DEFAULT_MAX_CRAWL_LENGTH, DEFAULT_TIMEOUT_SECS, FileSearchConfig,
};

use serde::{Deserialize, Serialize};
use toolhost_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Search / crawl service settings
    pub search: FileSearchConfig,
    /// Document loader settings
    pub document: FileDocumentConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.search.validate();
        issues.extend(self.document.validate());
        issues
    }
}
