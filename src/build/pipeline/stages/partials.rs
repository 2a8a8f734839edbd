//! Partial inclusion stage.
//!
//! Expands `{{ partial: name }}` tokens with the contents of
//! `{root}/partials/{name}`. Each partial gets placeholder substitution with
//! the parent page's values (`{{ content }}` is empty inside a partial) and
//! then has its own partial tokens expanded recursively.
//!
//! Missing and cyclic partials are deleted in place, so expansion always
//! terminates with no partial tokens left behind.
//!
//! Partial names cannot contain whitespace or `}`. Text such as
//! `{{ partial: my header.html }}` is not a partial token and stays in the
//! output untouched.

use std::collections::HashSet;
use std::ops::{Deref, DerefMut, Range};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::placeholders::{PlaceholderValues, substitute};
use crate::build::dirs;
use crate::build::pipeline::{PageContext, PipelineError, Stage};
use crate::logger::log_verbose;

/// Captures the partial name: one run of non-whitespace, non-`}` characters.
static PARTIAL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\{\{\s*partial\s*:\s*([^\s}]+)\s*\}\}").unwrap());

/// Stage that resolves partial references in the working content.
pub struct PartialStage;

impl Stage for PartialStage {
    fn name(&self) -> &'static str {
        "partials"
    }

    fn process(&self, ctx: &mut PageContext) -> Result<(), PipelineError> {
        let partials_dir = ctx.root_dir.join(dirs::PARTIALS);
        let mut stack = std::mem::take(&mut ctx.included_partials);

        let result = expand_partials(
            &ctx.content,
            &PlaceholderValues::for_partial(ctx),
            &partials_dir,
            &mut stack,
            ctx.verbose,
        );
        ctx.included_partials = stack;

        let expanded = result?;
        if expanded.included > 0 {
            log_verbose(
                ctx.verbose,
                format!("      Included {} partial(s)", expanded.included),
            );
        }
        ctx.content = expanded.text;
        Ok(())
    }
}

/// Result of expanding the partial tokens in one piece of text.
#[derive(Debug)]
pub struct Expanded {
    pub text: String,
    /// Partials spliced in at this level (not counting nested ones).
    pub included: usize,
}

/// Marks a partial as being expanded for as long as the guard lives.
///
/// Dropping the guard removes the path again, including when expansion
/// bails out early with an error.
struct InclusionGuard<'s> {
    stack: &'s mut HashSet<PathBuf>,
    path: PathBuf,
}

impl<'s> InclusionGuard<'s> {
    fn enter(stack: &'s mut HashSet<PathBuf>, path: PathBuf) -> Self {
        stack.insert(path.clone());
        Self { stack, path }
    }
}

impl Deref for InclusionGuard<'_> {
    type Target = HashSet<PathBuf>;

    fn deref(&self) -> &Self::Target {
        self.stack
    }
}

impl DerefMut for InclusionGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.stack
    }
}

impl Drop for InclusionGuard<'_> {
    fn drop(&mut self) {
        self.stack.remove(&self.path);
    }
}

/// Expand every partial token in `text`.
///
/// Tokens are visited last to first so that splicing one never shifts the
/// byte range of a token still waiting to be processed. `stack` holds the
/// partials currently being expanded and is left as it was on return.
pub fn expand_partials(
    text: &str,
    values: &PlaceholderValues,
    partials_dir: &Path,
    stack: &mut HashSet<PathBuf>,
    verbose: bool,
) -> Result<Expanded, PipelineError> {
    let tokens: Vec<(Range<usize>, String)> = PARTIAL_TOKEN
        .captures_iter(text)
        .filter_map(|caps| {
            let range = caps.get(0)?.range();
            let name = caps.get(1)?.as_str().trim().to_string();
            Some((range, name))
        })
        .collect();

    let mut result = text.to_string();
    let mut included = 0;

    for (range, name) in tokens.into_iter().rev() {
        let partial_path = partials_dir.join(&name);

        if stack.contains(&partial_path) {
            log_verbose(verbose, format!("      Skipping circular reference: {name}"));
            result.replace_range(range, "");
            continue;
        }

        if !partial_path.is_file() {
            log_verbose(verbose, format!("      Partial not found: {name}"));
            result.replace_range(range, "");
            continue;
        }

        let mut guard = InclusionGuard::enter(stack, partial_path.clone());

        let raw = std::fs::read_to_string(&partial_path)
            .map_err(|e| PipelineError::io(&partial_path, e))?;
        log_verbose(verbose, format!("      Including partial: {name}"));

        let substituted = substitute(&raw, values);
        let nested = expand_partials(&substituted.text, values, partials_dir, &mut guard, verbose)?;
        drop(guard);

        result.replace_range(range, &nested.text);
        included += 1;
    }

    Ok(Expanded {
        text: result,
        included,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::pipeline::SiteContext;
    use crate::test_helpers::SiteFixture;

    fn run(fixture: &SiteFixture, content: &str) -> String {
        let site = SiteContext {
            name: "Test Site".to_string(),
            ..Default::default()
        };
        let mut ctx = PageContext::new(String::new(), fixture.root().to_path_buf(), &site);
        ctx.set_page_body("PAGE BODY".to_string()).unwrap();
        ctx.title = "My Title".to_string();
        ctx.content = content.to_string();

        PartialStage.process(&mut ctx).unwrap();
        assert!(ctx.included_partials.is_empty());
        ctx.content
    }

    #[test]
    fn test_includes_partial() {
        let fixture = SiteFixture::new().partial("header.html", "<header>Header</header>");
        assert_eq!(
            run(&fixture, "<body>{{ partial: header.html }}</body>"),
            "<body><header>Header</header></body>"
        );
    }

    #[test]
    fn test_token_syntax_is_flexible() {
        let fixture = SiteFixture::new().partial("nav.html", "<nav></nav>");
        assert_eq!(run(&fixture, "{{partial:nav.html}}"), "<nav></nav>");
        assert_eq!(run(&fixture, "{{  PARTIAL :  nav.html  }}"), "<nav></nav>");
    }

    #[test]
    fn test_name_with_whitespace_is_not_a_token() {
        let fixture = SiteFixture::new().partial("my header.html", "<header></header>");
        assert_eq!(
            run(&fixture, "a{{ partial: my header.html }}b"),
            "a{{ partial: my header.html }}b"
        );
    }

    #[test]
    fn test_multiple_partials_in_order() {
        let fixture = SiteFixture::new()
            .partial("a.html", "A")
            .partial("b.html", "BB");
        assert_eq!(
            run(&fixture, "1{{ partial: a.html }}2{{ partial: b.html }}3{{ partial: a.html }}4"),
            "1A2BB3A4"
        );
    }

    #[test]
    fn test_partial_placeholders_use_page_values() {
        let fixture = SiteFixture::new()
            .partial("title.html", "<h1>{{ title }} | {{ site.name }}</h1>[{{ content }}]");
        assert_eq!(
            run(&fixture, "{{ partial: title.html }}"),
            "<h1>My Title | Test Site</h1>[]"
        );
    }

    #[test]
    fn test_nested_partials() {
        let fixture = SiteFixture::new()
            .partial("outer.html", "<div>{{ partial: inner.html }}</div>")
            .partial("inner.html", "<span>{{ title }}</span>");
        assert_eq!(
            run(&fixture, "{{ partial: outer.html }}"),
            "<div><span>My Title</span></div>"
        );
    }

    #[test]
    fn test_missing_partial_is_removed() {
        let fixture = SiteFixture::new();
        assert_eq!(run(&fixture, "<p>{{ partial: missing.html }}</p>"), "<p></p>");
    }

    #[test]
    fn test_missing_partials_directory() {
        let fixture = SiteFixture::new();
        assert!(!fixture.root().join("partials").exists());
        assert_eq!(run(&fixture, "a{{ partial: x.html }}b"), "ab");
    }

    #[test]
    fn test_self_reference_is_cut() {
        let fixture = SiteFixture::new().partial("loop.html", "<loop>{{ partial: loop.html }}</loop>");
        assert_eq!(run(&fixture, "{{ partial: loop.html }}"), "<loop></loop>");
    }

    #[test]
    fn test_mutual_cycle_terminates() {
        let fixture = SiteFixture::new()
            .partial("a.html", "A({{ partial: b.html }})")
            .partial("b.html", "B({{ partial: a.html }})");
        let output = run(&fixture, "{{ partial: a.html }}|{{ partial: b.html }}");
        assert_eq!(output, "A(B())|B(A())");
        assert!(!output.contains("partial:"));
    }

    #[test]
    fn test_same_partial_in_sibling_branches() {
        let fixture = SiteFixture::new()
            .partial("list.html", "{{ partial: item.html }}{{ partial: item.html }}")
            .partial("item.html", "<li></li>");
        assert_eq!(
            run(&fixture, "<ul>{{ partial: list.html }}</ul>"),
            "<ul><li></li><li></li></ul>"
        );
    }

    #[test]
    fn test_included_count() {
        let fixture = SiteFixture::new()
            .partial("a.html", "{{ partial: b.html }}")
            .partial("b.html", "b");
        let site = SiteContext::default();
        let ctx = PageContext::new(String::new(), fixture.root().to_path_buf(), &site);
        let mut stack = HashSet::new();

        let expanded = expand_partials(
            "{{ partial: a.html }}{{ partial: gone.html }}{{ partial: a.html }}",
            &PlaceholderValues::for_partial(&ctx),
            &fixture.root().join("partials"),
            &mut stack,
            false,
        )
        .unwrap();
        assert_eq!(expanded.text, "bb");
        assert_eq!(expanded.included, 2);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_directory_is_not_a_partial() {
        let fixture = SiteFixture::new().partial_dir("section.html");
        assert_eq!(run(&fixture, "a{{ partial: section.html }}b"), "ab");
    }

    #[test]
    fn test_guard_releases_on_read_error() {
        let fixture = SiteFixture::new()
            .partial("outer.html", "{{ partial: broken.html }}")
            .partial_bytes("broken.html", &[0xff, 0xfe, 0xfd]);
        let site = SiteContext::default();
        let ctx = PageContext::new(String::new(), fixture.root().to_path_buf(), &site);
        let mut stack = HashSet::new();

        let result = expand_partials(
            "{{ partial: outer.html }}",
            &PlaceholderValues::for_partial(&ctx),
            &fixture.root().join("partials"),
            &mut stack,
            false,
        );
        assert!(matches!(result, Err(PipelineError::Io { .. })));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_guard_removes_path_on_drop() {
        let mut stack = HashSet::new();
        stack.insert(PathBuf::from("/kept"));
        {
            let guard = InclusionGuard::enter(&mut stack, PathBuf::from("/p/a.html"));
            assert!(guard.contains(Path::new("/p/a.html")));
        }
        assert_eq!(stack.len(), 1);
        assert!(stack.contains(Path::new("/kept")));
    }
}
