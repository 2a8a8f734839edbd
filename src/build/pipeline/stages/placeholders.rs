//! Placeholder substitution stage.
//!
//! Recognised tokens (case-insensitive, any whitespace inside the braces):
//! `{{ content }}`, `{{ title }}`, `{{ site.name }}`, `{{ site.description }}`,
//! `{{ year }}`, `{{ epoch }}`, `{{ permalink }}`.
//!
//! Each token class is replaced everywhere in one pass before the next class
//! runs. Inserted values are literal text and are never re-scanned by the
//! class that inserted them. Anything else in `{{ }}` is left alone,
//! including `{{ partial: ... }}`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::build::pipeline::{PageContext, PipelineError, Stage};
use crate::logger::log_verbose;

/// A placeholder class, in substitution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Content,
    Title,
    SiteName,
    SiteDescription,
    Year,
    Epoch,
    Permalink,
}

impl Placeholder {
    const ALL: [Placeholder; 7] = [
        Placeholder::Content,
        Placeholder::Title,
        Placeholder::SiteName,
        Placeholder::SiteDescription,
        Placeholder::Year,
        Placeholder::Epoch,
        Placeholder::Permalink,
    ];

    fn pattern(self) -> &'static Regex {
        static CONTENT: LazyLock<Regex> = LazyLock::new(|| token(r"content"));
        static TITLE: LazyLock<Regex> = LazyLock::new(|| token(r"title"));
        static SITE_NAME: LazyLock<Regex> = LazyLock::new(|| token(r"site\.name"));
        static SITE_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| token(r"site\.description"));
        static YEAR: LazyLock<Regex> = LazyLock::new(|| token(r"year"));
        static EPOCH: LazyLock<Regex> = LazyLock::new(|| token(r"epoch"));
        static PERMALINK: LazyLock<Regex> = LazyLock::new(|| token(r"permalink"));

        match self {
            Placeholder::Content => &CONTENT,
            Placeholder::Title => &TITLE,
            Placeholder::SiteName => &SITE_NAME,
            Placeholder::SiteDescription => &SITE_DESCRIPTION,
            Placeholder::Year => &YEAR,
            Placeholder::Epoch => &EPOCH,
            Placeholder::Permalink => &PERMALINK,
        }
    }
}

fn token(name: &str) -> Regex {
    Regex::new(&format!(r"(?i)\{{\{{\s*{name}\s*\}}\}}")).unwrap()
}

/// Resolved values for every placeholder class.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderValues<'a> {
    pub content: &'a str,
    pub title: &'a str,
    pub site_name: &'a str,
    pub site_description: &'a str,
    pub year: &'a str,
    pub epoch: &'a str,
    pub permalink: &'a str,
}

impl<'a> PlaceholderValues<'a> {
    /// Values for a page, with its body bound to `{{ content }}`.
    pub fn for_page(ctx: &'a PageContext) -> Self {
        Self {
            content: ctx.page_body(),
            title: &ctx.title,
            site_name: &ctx.site.name,
            site_description: &ctx.site.description,
            year: &ctx.year,
            epoch: &ctx.epoch,
            permalink: &ctx.permalink,
        }
    }

    /// Values for a partial: same as the page, but `{{ content }}` is empty.
    pub fn for_partial(ctx: &'a PageContext) -> Self {
        Self {
            content: "",
            ..Self::for_page(ctx)
        }
    }

    fn get(&self, placeholder: Placeholder) -> &'a str {
        match placeholder {
            Placeholder::Content => self.content,
            Placeholder::Title => self.title,
            Placeholder::SiteName => self.site_name,
            Placeholder::SiteDescription => self.site_description,
            Placeholder::Year => self.year,
            Placeholder::Epoch => self.epoch,
            Placeholder::Permalink => self.permalink,
        }
    }
}

/// Result of a substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    pub text: String,
    /// Number of tokens replaced across all classes.
    pub replacements: usize,
}

/// Replace every recognised placeholder in `text`.
pub fn substitute(text: &str, values: &PlaceholderValues) -> Substituted {
    let mut result = text.to_string();
    let mut replacements = 0;

    for placeholder in Placeholder::ALL {
        let value = values.get(placeholder);
        let mut count = 0;
        let replaced = placeholder.pattern().replace_all(&result, |_: &Captures| {
            count += 1;
            value
        });
        if count > 0 {
            result = replaced.into_owned();
            replacements += count;
        }
    }

    Substituted {
        text: result,
        replacements,
    }
}

/// Stage that substitutes placeholder tokens in the working content.
pub struct PlaceholderStage;

impl Stage for PlaceholderStage {
    fn name(&self) -> &'static str {
        "placeholders"
    }

    fn process(&self, ctx: &mut PageContext) -> Result<(), PipelineError> {
        let substituted = substitute(&ctx.content, &PlaceholderValues::for_page(ctx));
        log_verbose(
            ctx.verbose,
            format!("      Replaced {} placeholder(s)", substituted.replacements),
        );
        ctx.content = substituted.text;
        Ok(())
    }
}
