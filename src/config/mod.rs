//! Configuration loading and types for genny.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Locating and loading `genny.toml` (`load`)

mod load;
mod types;

pub use load::CONFIG_FILE_NAME;
pub use types::{FileConfig, SiteConfig};

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not find {CONFIG_FILE_NAME} in {0} or any parent directory")]
    RootNotFound(std::path::PathBuf),

    #[error("config file not found: {0}")]
    NotFound(std::path::PathBuf),

    #[error("failed to encode config file path as a unicode string: {0}")]
    EncodePath(std::path::PathBuf),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),
}
