//! Configuration type definitions.
//!
//! `FileConfig` mirrors the keys of `genny.toml`; `SiteConfig` adds the
//! directories inferred from where that file lives.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::build::dirs;

/// The contents of `genny.toml`.
///
/// ```toml
/// name = "My Site"
/// description = "Things I wrote"
/// base_url = "https://example.com"
/// generate_sitemap = true
/// minify_output = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Used for permalinks and the sitemap when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default = "default_true")]
    pub generate_sitemap: bool,
    #[serde(default = "default_true")]
    pub minify_output: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            base_url: None,
            generate_sitemap: true,
            minify_output: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Fully resolved site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub base_url: Option<String>,
    pub generate_sitemap: bool,
    pub minify_output: bool,
    /// Directory containing `genny.toml`
    pub root_dir: PathBuf,
    /// Where the generated site is written (`{root}/build`)
    pub output_dir: PathBuf,
}

impl SiteConfig {
    /// Combine file settings with the site root they were loaded from.
    pub fn from_file(file: FileConfig, root_dir: PathBuf) -> Self {
        let output_dir = root_dir.join(dirs::BUILD);
        Self {
            name: file.name,
            description: file.description,
            base_url: file.base_url,
            generate_sitemap: file.generate_sitemap,
            minify_output: file.minify_output,
            root_dir,
            output_dir,
        }
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.root_dir.join(dirs::PAGES)
    }

    pub fn public_dir(&self) -> PathBuf {
        self.root_dir.join(dirs::PUBLIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_derives_output_dir() {
        let config = SiteConfig::from_file(FileConfig::default(), PathBuf::from("/site"));
        assert_eq!(config.output_dir, PathBuf::from("/site/build"));
        assert_eq!(config.pages_dir(), PathBuf::from("/site/pages"));
        assert_eq!(config.public_dir(), PathBuf::from("/site/public"));
    }

    #[test]
    fn test_file_config_defaults() {
        let config = FileConfig::default();
        assert!(config.generate_sitemap);
        assert!(config.minify_output);
        assert!(config.base_url.is_none());
    }
}
