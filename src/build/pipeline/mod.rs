//! Page processing pipeline.
//!
//! The pipeline transforms one page's raw source through a series of stages:
//! 1. Metadata extraction (title, layout name, year, epoch)
//! 2. Permalink calculation
//! 3. Directive comment removal (fixes the page body)
//! 4. Layout application
//! 5. Placeholder substitution
//! 6. Partial inclusion
//! 7. Minification (optional)
//!
//! Order matters: stripping directives must precede layout application so
//! they never leak into the page body, and placeholders are substituted into
//! the chosen layout rather than the page's own pre-layout content.

mod context;
mod error;
mod stages;

pub use context::{PageContext, SiteContext};
pub use error::PipelineError;

use crate::logger::log_verbose;
use stages::{
    CommentStage, LayoutStage, MetadataStage, MinifyStage, PartialStage, PermalinkStage,
    PlaceholderStage,
};

/// A stage in the page processing pipeline.
///
/// Stages communicate only through the fields of the [`PageContext`].
pub trait Stage: Send + Sync {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    /// Transform the page context in place.
    fn process(&self, ctx: &mut PageContext) -> Result<(), PipelineError>;
}

/// The page processing pipeline.
///
/// Holds an ordered list of stages; the default page pipeline is:
/// metadata → permalink → comments → layout → placeholders → partials,
/// followed by minify when enabled.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the full page pipeline.
    pub fn page_pipeline(minify: bool) -> Self {
        let mut pipeline = Self::new();
        pipeline
            .add_stage(MetadataStage)
            .add_stage(PermalinkStage)
            .add_stage(CommentStage)
            .add_stage(LayoutStage)
            .add_stage(PlaceholderStage)
            .add_stage(PartialStage);
        if minify {
            pipeline.add_stage(MinifyStage);
        }
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run every stage over the context in order and return it.
    pub fn run<'a>(&self, mut ctx: PageContext<'a>) -> Result<PageContext<'a>, PipelineError> {
        for stage in &self.stages {
            log_verbose(ctx.verbose, format!("    Running stage: {}", stage.name()));
            stage.process(&mut ctx)?;
        }
        Ok(ctx)
    }

    /// Get the names of all stages in order.
    #[allow(dead_code)]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::page_pipeline(false)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    struct AppendStage(&'static str);

    impl Stage for AppendStage {
        fn name(&self) -> &'static str {
            self.0
        }

        fn process(&self, ctx: &mut PageContext) -> Result<(), PipelineError> {
            ctx.content.push_str(self.0);
            Ok(())
        }
    }

    struct FailStage;

    impl Stage for FailStage {
        fn name(&self) -> &'static str {
            "fail"
        }

        fn process(&self, _ctx: &mut PageContext) -> Result<(), PipelineError> {
            Err(PipelineError::stage("fail", "boom"))
        }
    }

    #[test]
    fn test_default_stage_order() {
        assert_eq!(
            Pipeline::page_pipeline(false).stage_names(),
            vec!["metadata", "permalink", "comments", "layout", "placeholders", "partials"]
        );
        assert_eq!(
            Pipeline::page_pipeline(true).stage_names().last(),
            Some(&"minify")
        );
    }

    #[test]
    fn test_run_applies_stages_in_order() {
        let site = SiteContext::default();
        let ctx = PageContext::new(String::new(), PathBuf::from("/site"), &site);

        let mut pipeline = Pipeline::new();
        pipeline.add_stage(AppendStage("a")).add_stage(AppendStage("b"));

        let ctx = pipeline.run(ctx).unwrap();
        assert_eq!(ctx.content, "ab");
    }

    #[test]
    fn test_run_stops_at_first_error() {
        let site = SiteContext::default();
        let ctx = PageContext::new(String::new(), PathBuf::from("/site"), &site);

        let mut pipeline = Pipeline::new();
        pipeline.add_stage(FailStage).add_stage(AppendStage("never"));

        assert!(matches!(
            pipeline.run(ctx),
            Err(PipelineError::Stage { stage, .. }) if stage == "fail"
        ));
    }

    #[test]
    fn test_verbose_run_matches_quiet_run() {
        let site = SiteContext::default();
        let mut pipeline = Pipeline::new();
        pipeline.add_stage(AppendStage("a")).add_stage(AppendStage("b"));

        let quiet = PageContext::new(String::new(), PathBuf::from("/site"), &site);
        let loud = PageContext::new(String::new(), PathBuf::from("/site"), &site).with_verbose(true);

        assert_eq!(pipeline.run(quiet).unwrap().content, pipeline.run(loud).unwrap().content);
    }

    #[test]
    fn test_empty_pipeline_returns_context_unchanged() {
        let site = SiteContext::default();
        let ctx = PageContext::new("x".to_string(), PathBuf::from("/site"), &site);
        let ctx = Pipeline::new().run(ctx).unwrap();
        assert_eq!(ctx.content, "x");
    }
}
