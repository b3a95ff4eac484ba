//! Configuration file loading for toolhost
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOOLHOST_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./toolhost.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/toolhost/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_MAX_BODY_SIZE, DEFAULT_MAX_CRAWL_LENGTH, DEFAULT_TIMEOUT_SECS, FileConfig,
    FileDocumentConfig, FileSearchConfig,
};
pub use loader::ConfigLoader;
