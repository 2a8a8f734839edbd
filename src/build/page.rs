//! Single-page build entry point.

use std::path::Path;

use super::pipeline::{PageContext, Pipeline, PipelineError, SiteContext};

/// Build one page and return its rendered HTML.
///
/// Reads the page file, runs it through the page pipeline (with minification
/// when `minify` is set) and returns the final content. The caller decides
/// where the result is written.
pub fn build_page(
    file_path: &Path,
    root_dir: &Path,
    site: &SiteContext,
    minify: bool,
    verbose: bool,
) -> Result<String, PipelineError> {
    let raw_source =
        std::fs::read_to_string(file_path).map_err(|e| PipelineError::io(file_path, e))?;

    let ctx = PageContext::new(raw_source, root_dir.to_path_buf(), site)
        .with_file_path(file_path)
        .with_verbose(verbose);

    let ctx = Pipeline::page_pipeline(minify).run(ctx)?;
    Ok(ctx.content)
}
