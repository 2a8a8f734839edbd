//! Permalink calculation stage.

use crate::build::dirs;
use crate::build::paths::page_url;
use crate::build::pipeline::{PageContext, PipelineError, Stage};

/// Stage that derives the page's public URL from its file path.
///
/// Pages without a file path keep whatever permalink they already had.
pub struct PermalinkStage;

impl Stage for PermalinkStage {
    fn name(&self) -> &'static str {
        "permalink"
    }

    fn process(&self, ctx: &mut PageContext) -> Result<(), PipelineError> {
        let Some(file_path) = &ctx.file_path else {
            return Ok(());
        };

        let pages_dir = ctx.root_dir.join(dirs::PAGES);
        ctx.permalink = page_url(file_path, &pages_dir, ctx.site.base_url.as_deref());

        Ok(())
    }
}
