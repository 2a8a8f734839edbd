//! Configuration loading from files.
//!
//! This module handles locating the site root and parsing `genny.toml`.

use std::path::{Path, PathBuf};

use super::{ConfigError, FileConfig, SiteConfig};
use crate::build::base_path_from_config;

pub const CONFIG_FILE_NAME: &str = "genny.toml";

/// Walk up from `start` until a directory containing `genny.toml` is found.
pub fn find_root_directory(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file())
        .map(Path::to_path_buf)
}

impl SiteConfig {
    /// Load the config from the command line argument.
    ///
    /// Without an explicit file, the nearest `genny.toml` at or above the
    /// current directory is used.
    pub async fn load_from_arg(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CwdFailure)?;

        let config_file = match config_file {
            Some(path) if path.is_relative() => cwd.join(path),
            Some(path) => path.to_path_buf(),
            None => find_root_directory(&cwd)
                .map(|root| root.join(CONFIG_FILE_NAME))
                .ok_or(ConfigError::RootNotFound(cwd))?,
        };

        Self::load_from_file(&config_file).await
    }

    /// Load the config from a file path
    pub(crate) async fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        let file = config::Config::builder()
            .add_source(config::File::new(path_str, config::FileFormat::Toml))
            .add_source(config::Environment::with_prefix("GENNY").try_parsing(true))
            .build()?
            .try_deserialize::<FileConfig>()?;

        Ok(SiteConfig::from_file(file, base_path_from_config(path)))
    }
}
