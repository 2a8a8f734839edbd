//! Metadata extraction stage.
//!
//! Reads the title and layout directives from the raw page source and
//! captures the build-time year and epoch.

use std::sync::LazyLock;

use chrono::{Datelike, Local, Utc};
use regex::Regex;

use crate::build::pipeline::{PageContext, PipelineError, Stage};

pub const DEFAULT_LAYOUT_NAME: &str = "default.html";

static TITLE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!--\s*title:\s*(.+?)\s*-->").unwrap());

static TITLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

static LAYOUT_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!--\s*layout:\s*(\S+)\s*-->").unwrap());

/// Stage that populates title, layout name, year and epoch.
///
/// Absent directives are normal: the title stays empty and the layout
/// falls back to `default.html`.
pub struct MetadataStage;

impl Stage for MetadataStage {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn process(&self, ctx: &mut PageContext) -> Result<(), PipelineError> {
        if let Some(title) = extract_title(ctx.raw_source()) {
            ctx.title = title;
        }
        ctx.layout_name = extract_layout_name(ctx.raw_source())
            .unwrap_or_else(|| DEFAULT_LAYOUT_NAME.to_string());

        ctx.year = Local::now().year().to_string();
        ctx.epoch = Utc::now().timestamp().to_string();

        Ok(())
    }
}

/// Title from a `<!-- title: ... -->` directive, else the first `<title>` tag.
pub fn extract_title(source: &str) -> Option<String> {
    TITLE_COMMENT
        .captures(source)
        .or_else(|| TITLE_TAG.captures(source))
        .map(|caps| caps[1].trim().to_string())
}

/// Layout name from a `<!-- layout: ... -->` directive.
pub fn extract_layout_name(source: &str) -> Option<String> {
    LAYOUT_COMMENT
        .captures(source)
        .map(|caps| caps[1].trim().to_string())
}
