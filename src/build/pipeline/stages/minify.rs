//! Whitespace minification stage.

use std::sync::LazyLock;

use regex::Regex;

use crate::build::pipeline::{PageContext, PipelineError, Stage};

static TAG_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*([<>])\s*").unwrap());
static CLOSING_SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</\s+").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Stage that collapses whitespace in the final HTML.
///
/// Only added to the pipeline when the site has `minify_output` enabled.
pub struct MinifyStage;

impl Stage for MinifyStage {
    fn name(&self) -> &'static str {
        "minify"
    }

    fn process(&self, ctx: &mut PageContext) -> Result<(), PipelineError> {
        ctx.content = minify(&ctx.content);
        Ok(())
    }
}

/// Collapse whitespace without touching any non-whitespace character.
///
/// Whitespace on either side of `<` or `>` is removed (between tags and
/// just inside a tag's brackets), as is whitespace after the `</` of a
/// closing tag. Every other run becomes a single space, and the document
/// is trimmed.
pub fn minify(html: &str) -> String {
    let result = TAG_BOUNDARY.replace_all(html, "$1");
    let result = CLOSING_SLASH.replace_all(&result, "</");
    let result = WHITESPACE_RUN.replace_all(&result, " ");
    result.trim().to_string()
}
