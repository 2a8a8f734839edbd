//! Layout application stage.
//!
//! Replaces the working content with the named layout file. The page body
//! stays in the context and is inserted later through `{{ content }}`.

use std::path::{Path, PathBuf};

use crate::build::dirs;
use crate::build::pipeline::{PageContext, PipelineError, Stage};
use crate::logger::log_verbose;

/// Stage that swaps the named layout in as the working content.
///
/// A missing layout file is not an error: the stripped page content is
/// rendered on its own.
pub struct LayoutStage;

impl Stage for LayoutStage {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn process(&self, ctx: &mut PageContext) -> Result<(), PipelineError> {
        let layout_path = layout_path(&ctx.root_dir, &ctx.layout_name);

        if layout_path.is_file() {
            ctx.content = std::fs::read_to_string(&layout_path)
                .map_err(|e| PipelineError::io(&layout_path, e))?;
            log_verbose(ctx.verbose, format!("      Applied layout: {}", ctx.layout_name));
        } else {
            log_verbose(
                ctx.verbose,
                format!(
                    "      Layout not found: {} (using page content as-is)",
                    ctx.layout_name
                ),
            );
        }

        Ok(())
    }
}

/// Resolve `{root}/layouts/{name}`, appending `.html` when missing.
pub fn layout_path(root_dir: &Path, layout_name: &str) -> PathBuf {
    let layouts_dir = root_dir.join(dirs::LAYOUTS);
    if layout_name.ends_with(".html") {
        layouts_dir.join(layout_name)
    } else {
        layouts_dir.join(format!("{layout_name}.html"))
    }
}
