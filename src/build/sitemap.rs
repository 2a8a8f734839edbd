//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing all pages for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com</loc>
//!     <lastmod>2025-01-01T12:00:00Z</lastmod>
//!     <changefreq>monthly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::BuildError;
use super::paths::{page_url, page_url_path};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

struct UrlEntry {
    loc: String,
    lastmod: String,
    priority: &'static str,
}

impl UrlEntry {
    fn for_page(page: &Path, pages_dir: &Path, base_url: Option<&str>) -> Result<Self, BuildError> {
        let modified = std::fs::metadata(page)
            .and_then(|m| m.modified())
            .map_err(|e| BuildError::io(page, e))?;
        let lastmod: DateTime<Utc> = modified.into();

        let priority = if page_url_path(page, pages_dir).is_empty() {
            "1.0"
        } else {
            "0.8"
        };

        Ok(Self {
            loc: page_url(page, pages_dir, base_url),
            lastmod: lastmod.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            priority,
        })
    }
}

/// Render the sitemap for the given pages.
///
/// Returns `None` when there are no pages.
pub fn generate_sitemap(
    pages: &[PathBuf],
    pages_dir: &Path,
    base_url: Option<&str>,
) -> Result<Option<String>, BuildError> {
    if pages.is_empty() {
        return Ok(None);
    }

    let entries = pages
        .iter()
        .map(|page| UrlEntry::for_page(page, pages_dir, base_url))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(into_xml(entries)))
}

fn into_xml(entries: Vec<UrlEntry>) -> String {
    let mut xml = String::with_capacity(256 + entries.len() * 160);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in entries {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&entry.lastmod);
        xml.push_str("</lastmod>\n    <changefreq>monthly</changefreq>\n    <priority>");
        xml.push_str(entry.priority);
        xml.push_str("</priority>\n  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
