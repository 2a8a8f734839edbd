//! Shared test utilities.
//!
//! `SiteFixture` lays out a throwaway site tree in a temp directory:
//!
//! ```ignore
//! let fixture = SiteFixture::new()
//!     .layout("default.html", "<html>{{ content }}</html>")
//!     .partial("nav.html", "<nav></nav>")
//!     .page("index.html", "<p>Hi</p>");
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::build::dirs;

pub struct SiteFixture {
    tmp: TempDir,
}

impl SiteFixture {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn page_path(&self, name: &str) -> PathBuf {
        self.root().join(dirs::PAGES).join(name)
    }

    pub fn page(self, name: &str, content: &str) -> Self {
        self.file(dirs::PAGES, name, content.as_bytes())
    }

    pub fn layout(self, name: &str, content: &str) -> Self {
        self.file(dirs::LAYOUTS, name, content.as_bytes())
    }

    pub fn partial(self, name: &str, content: &str) -> Self {
        self.file(dirs::PARTIALS, name, content.as_bytes())
    }

    pub fn partial_bytes(self, name: &str, content: &[u8]) -> Self {
        self.file(dirs::PARTIALS, name, content)
    }

    /// Create a directory where a partial would be expected.
    pub fn partial_dir(self, name: &str) -> Self {
        std::fs::create_dir_all(self.root().join(dirs::PARTIALS).join(name)).unwrap();
        self
    }

    pub fn public(self, name: &str, content: &str) -> Self {
        self.file(dirs::PUBLIC, name, content.as_bytes())
    }

    /// Write `genny.toml` at the site root.
    pub fn config(self, content: &str) -> Self {
        std::fs::write(self.root().join(crate::config::CONFIG_FILE_NAME), content).unwrap();
        self
    }

    fn file(self, dir: &str, name: &str, content: &[u8]) -> Self {
        let path = self.root().join(dir).join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        self
    }
}
