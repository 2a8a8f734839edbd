//! Directive comment removal stage.

use std::sync::LazyLock;

use regex::Regex;

use crate::build::pipeline::{PageContext, PipelineError, Stage};

static LAYOUT_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*<!--\s*layout:\s*\S+\s*-->\s*").unwrap());

static TITLE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*<!--\s*title:\s*.+?\s*-->\s*").unwrap());

/// Stage that removes `layout` and `title` directive comments.
///
/// Whitespace around each directive goes with it, so no blank lines are
/// left behind. Other comments are untouched. The stripped text becomes
/// the page body.
pub struct CommentStage;

impl Stage for CommentStage {
    fn name(&self) -> &'static str {
        "comments"
    }

    fn process(&self, ctx: &mut PageContext) -> Result<(), PipelineError> {
        ctx.content = strip_directives(&ctx.content);
        ctx.set_page_body(ctx.content.clone())
    }
}

/// Remove every layout and title directive comment from `content`.
///
/// Removing one directive can join the text around it into another, so
/// passes repeat until nothing more is removed.
pub fn strip_directives(content: &str) -> String {
    let mut stripped = content.to_string();
    loop {
        let next = {
            let without_layout = LAYOUT_DIRECTIVE.replace_all(&stripped, "");
            TITLE_DIRECTIVE.replace_all(&without_layout, "").into_owned()
        };
        // Every match is non-empty, so an unchanged length means no match.
        if next.len() == stripped.len() {
            return next;
        }
        stripped = next;
    }
}
