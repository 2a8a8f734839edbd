//! Path and URL conversion utilities.
//!
//! This module handles conversions between:
//! - Page file paths (files under the `pages` directory)
//! - URL paths (the permalink at which a page will be served)
//! - Output file paths (where pages are written in the output directory)

use std::path::{Component, Path, PathBuf};

/// Compute the URL path of a page relative to the pages directory.
///
/// Root-level pages use their bare file name, with `index.html` collapsing
/// to the empty path. Pages in subdirectories keep their full relative path
/// (forward slashes), including a nested `index.html`.
///
/// # Examples
/// ```ignore
/// page_url_path("/site/pages/index.html", "/site/pages") => ""
/// page_url_path("/site/pages/about.html", "/site/pages") => "about.html"
/// page_url_path("/site/pages/blog/index.html", "/site/pages") => "blog/index.html"
/// ```
pub fn page_url_path(page_path: &Path, pages_dir: &Path) -> String {
    let segments: Vec<String> = match page_path.strip_prefix(pages_dir) {
        Ok(relative) => relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect(),
        // Not under the pages directory: treat it as a root-level page
        Err(_) => page_path
            .file_name()
            .map(|name| vec![name.to_string_lossy().into_owned()])
            .unwrap_or_default(),
    };

    match segments.as_slice() {
        [] => String::new(),
        [file_name] if file_name == "index.html" => String::new(),
        [file_name] => file_name.clone(),
        nested => nested.join("/"),
    }
}

/// Compute the full permalink of a page.
///
/// # Examples
/// ```ignore
/// page_url(".../pages/index.html", pages, None) => "/"
/// page_url(".../pages/about.html", pages, None) => "/about.html"
/// page_url(".../pages/index.html", pages, Some("https://example.com")) => "https://example.com"
/// page_url(".../pages/about.html", pages, Some("https://example.com/")) => "https://example.com/about.html"
/// ```
pub fn page_url(page_path: &Path, pages_dir: &Path, base_url: Option<&str>) -> String {
    join_url(base_url, &page_url_path(page_path, pages_dir))
}

/// Join a URL path onto an optional base URL.
fn join_url(base_url: Option<&str>, url_path: &str) -> String {
    match base_url {
        Some(base) => {
            let base = base.trim_end_matches('/');
            if url_path.is_empty() {
                base.to_string()
            } else {
                format!("{base}/{url_path}")
            }
        }
        None => format!("/{url_path}"),
    }
}

/// Convert a page file path to its output file path.
///
/// Root-level pages are written directly into the output directory;
/// subdirectory pages keep their structure.
///
/// # Examples
/// ```ignore
/// output_path("pages/index.html", pages, out) => out/index.html
/// output_path("pages/blog/post.html", pages, out) => out/blog/post.html
/// ```
pub fn output_path(page_path: &Path, pages_dir: &Path, output_dir: &Path) -> PathBuf {
    match page_path.strip_prefix(pages_dir) {
        Ok(relative) => output_dir.join(relative),
        Err(_) => match page_path.file_name() {
            Some(name) => output_dir.join(name),
            None => output_dir.to_path_buf(),
        },
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
