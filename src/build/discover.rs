//! Page discovery and public asset copying.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::BuildError;
use super::dirs::{is_ignored_directory, is_ignored_file};

/// True for directories below the walk root that should not be entered.
fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && is_ignored_directory(&entry.file_name().to_string_lossy())
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

/// Find every `.html` page below `pages_dir`, sorted by path.
///
/// Ignored directories are not descended into. A missing pages directory
/// simply yields no pages.
pub fn discover_pages(pages_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    if !pages_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(pages_dir)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_html(entry.path()) {
            pages.push(entry.into_path());
        }
    }

    pages.sort();
    Ok(pages)
}

/// Copy the public directory into the output directory.
///
/// Directory structure is preserved; ignored files and directories are
/// skipped. Returns the number of files copied.
pub fn copy_public_assets(public_dir: &Path, output_dir: &Path) -> Result<usize, BuildError> {
    if !public_dir.is_dir() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(public_dir)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file() || is_ignored_file(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(public_dir) else {
            continue;
        };
        let dest = output_dir.join(relative);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
        }
        std::fs::copy(entry.path(), &dest).map_err(|e| BuildError::io(&dest, e))?;
        copied += 1;
    }

    Ok(copied)
}
