//! Per-page processing context shared across stages.

use std::cell::OnceCell;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::SiteConfig;

use super::PipelineError;

/// Site-wide values, read-only during a build.
///
/// One instance can be shared by reference across every page.
#[derive(Debug, Clone, Default)]
pub struct SiteContext {
    pub name: String,
    pub description: String,
    pub base_url: Option<String>,
}

impl From<&SiteConfig> for SiteContext {
    fn from(config: &SiteConfig) -> Self {
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            base_url: config.base_url.clone(),
        }
    }
}

/// A page being processed through the pipeline.
///
/// Created fresh for every page and threaded through each stage in order:
///
/// 1. Initially: `content` = raw source, metadata fields empty
/// 2. After metadata: `title`, `layout_name`, `year`, `epoch` populated
/// 3. After permalink: `permalink` populated (when a file path is known)
/// 4. After comments: directives removed, page body fixed
/// 5. After layout: `content` = layout text (if the layout exists)
/// 6. After placeholders and partials: `content` = final HTML
#[derive(Debug)]
pub struct PageContext<'a> {
    /// Original file contents, never modified.
    raw_source: String,

    /// Text actively being transformed; reassigned by every stage.
    pub content: String,

    /// The page's own body, substituted for `{{ content }}`.
    page_body: OnceCell<String>,

    pub title: String,
    pub layout_name: String,
    pub year: String,
    pub epoch: String,
    pub permalink: String,

    // === Site-level data ===
    pub site: &'a SiteContext,

    /// Resolved paths of partials currently being expanded.
    pub included_partials: HashSet<PathBuf>,

    // === Inputs for resolving layouts and partials ===
    pub root_dir: PathBuf,
    pub file_path: Option<PathBuf>,

    /// Print diagnostics while processing; never changes output.
    pub verbose: bool,
}

impl<'a> PageContext<'a> {
    /// Create a context for a page's raw source.
    pub fn new(raw_source: String, root_dir: PathBuf, site: &'a SiteContext) -> Self {
        Self {
            content: raw_source.clone(),
            raw_source,
            page_body: OnceCell::new(),
            title: String::new(),
            layout_name: String::new(),
            year: String::new(),
            epoch: String::new(),
            permalink: String::new(),
            site,
            included_partials: HashSet::new(),
            root_dir,
            file_path: None,
            verbose: false,
        }
    }

    /// Set the path of the page file (used for the permalink).
    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn raw_source(&self) -> &str {
        &self.raw_source
    }

    /// The page body, or an empty string before it has been assigned.
    pub fn page_body(&self) -> &str {
        self.page_body.get().map(String::as_str).unwrap_or_default()
    }

    /// Assign the page body. It can only be assigned once per page.
    pub fn set_page_body(&mut self, body: String) -> Result<(), PipelineError> {
        self.page_body
            .set(body)
            .map_err(|_| PipelineError::stage("comments", "page body was already assigned"))
    }
}
