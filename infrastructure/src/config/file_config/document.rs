//! Document loader configuration from TOML (`[document]` section)

use crate::document::DEFAULT_MAX_FILE_SIZE;
use serde::{Deserialize, Serialize};
use toolhost_domain::{ConfigIssue, ConfigIssueCode};

/// Raw document configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDocumentConfig {
    /// Largest DOCX file accepted, in bytes
    pub max_file_size: u64,
}

impl Default for FileDocumentConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl FileDocumentConfig {
    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        if self.max_file_size == 0 {
            vec![ConfigIssue::error(
                ConfigIssueCode::ZeroLimit,
                "document.max_file_size must be greater than 0",
            )]
        } else {
            Vec::new()
        }
    }
}
