use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::logger::{log, log_empty, log_empty_verbose, log_verbose};

use super::discover::{copy_public_assets, discover_pages};
use super::build_page;
use super::paths::output_path;
use super::pipeline::{PipelineError, SiteContext};
use super::sitemap::generate_sitemap;

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("failed to build page {path}: {source}")]
    Page {
        path: PathBuf,
        source: PipelineError,
    },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to walk directory: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl BuildError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub struct BuildResult {
    pub output_dir: PathBuf,
    pub pages: usize,
    pub static_files: usize,
    pub sitemap: Option<PathBuf>,
}

pub struct Builder {
    config: SiteConfig,
    verbose: bool,
}

impl Builder {
    pub fn new(config: SiteConfig, verbose: bool) -> Self {
        Self { config, verbose }
    }

    pub fn build(&self) -> Result<BuildResult, BuildError> {
        // Build steps:
        // 1. Report configuration (verbose)
        // 2. Clean and recreate the output directory
        // 3. Discover pages
        // 4. Build and write each page
        // 5. Copy public assets
        // 6. Write the sitemap

        // Step 1: Configuration
        self.log_configuration();

        // Step 2: Output directory
        let output_dir = &self.config.output_dir;
        if output_dir.exists() {
            log_verbose(self.verbose, "Cleaning build directory...");
            std::fs::remove_dir_all(output_dir).map_err(|e| BuildError::io(output_dir, e))?;
        }
        std::fs::create_dir_all(output_dir).map_err(|e| BuildError::io(output_dir, e))?;

        // Step 3: Discover pages
        let pages_dir = self.config.pages_dir();
        let pages = discover_pages(&pages_dir)?;
        log(format!("Found {} page(s)", pages.len()));
        log_empty_verbose(self.verbose);

        // Step 4: Build each page
        let site = SiteContext::from(&self.config);
        for page in &pages {
            self.write_page(page, &pages_dir, &site)?;
        }

        // Step 5: Public assets
        let static_files = self.copy_assets()?;

        // Step 6: Sitemap
        let sitemap = self.write_sitemap(&pages, &pages_dir)?;

        log_empty_verbose(self.verbose);
        log(format!("Site generated to {}", output_dir.display()));

        Ok(BuildResult {
            output_dir: output_dir.clone(),
            pages: pages.len(),
            static_files,
            sitemap,
        })
    }

    /// Build one page and write it to its place in the output directory.
    fn write_page(&self, page: &Path, pages_dir: &Path, site: &SiteContext) -> Result<(), BuildError> {
        let output_dir = &self.config.output_dir;
        let dest = output_path(page, pages_dir, output_dir);

        let relative_src = page.strip_prefix(pages_dir).unwrap_or(page);
        let relative_dest = dest.strip_prefix(output_dir).unwrap_or(&dest);
        log_verbose(
            self.verbose,
            format!("Copying {} -> {}", relative_src.display(), relative_dest.display()),
        );

        let html = build_page(
            page,
            &self.config.root_dir,
            site,
            self.config.minify_output,
            self.verbose,
        )
        .map_err(|source| BuildError::Page {
            path: page.to_path_buf(),
            source,
        })?;

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
        }
        std::fs::write(&dest, html).map_err(|e| BuildError::io(&dest, e))?;

        log_verbose(self.verbose, format!("    Written: {}", relative_dest.display()));
        Ok(())
    }

    fn copy_assets(&self) -> Result<usize, BuildError> {
        let public_dir = self.config.public_dir();
        if !public_dir.is_dir() {
            return Ok(0);
        }

        log_verbose(self.verbose, "Copying public assets...");
        let copied = copy_public_assets(&public_dir, &self.config.output_dir)?;
        log_verbose(
            self.verbose,
            format!("  Copied {copied} file(s) from public directory"),
        );
        Ok(copied)
    }

    fn write_sitemap(&self, pages: &[PathBuf], pages_dir: &Path) -> Result<Option<PathBuf>, BuildError> {
        if !self.config.generate_sitemap {
            return Ok(None);
        }

        log_verbose(self.verbose, "Generating sitemap.xml...");
        let Some(xml) = generate_sitemap(pages, pages_dir, self.config.base_url.as_deref())? else {
            return Ok(None);
        };

        let sitemap_path = self.config.output_dir.join("sitemap.xml");
        std::fs::write(&sitemap_path, xml).map_err(|e| BuildError::io(&sitemap_path, e))?;
        log_verbose(self.verbose, "  Created: sitemap.xml");

        Ok(Some(sitemap_path))
    }

    fn log_configuration(&self) {
        if !self.verbose {
            return;
        }

        log("Configuration:");
        log(format!("  Root directory: {}", self.config.root_dir.display()));
        log(format!("  Output directory: {}", self.config.output_dir.display()));
        log(format!("  Site name: {}", self.config.name));
        log(format!("  Minify output: {}", self.config.minify_output));
        log(format!("  Generate sitemap: {}", self.config.generate_sitemap));
        log_empty();
    }
}
