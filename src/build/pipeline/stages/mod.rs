//! Default pipeline stages.
//!
//! The standard page processing pipeline consists of:
//!
//! 1. **MetadataStage** - Extract title, layout name, year and epoch
//! 2. **PermalinkStage** - Compute the page's public URL
//! 3. **CommentStage** - Strip directive comments, fix the page body
//! 4. **LayoutStage** - Swap in the named layout
//! 5. **PlaceholderStage** - Replace `{{ ... }}` value tokens
//! 6. **PartialStage** - Expand `{{ partial: name }}` recursively
//! 7. **MinifyStage** - Collapse whitespace (optional)

mod comments;
mod layout;
mod metadata;
mod minify;
mod partials;
mod permalink;
mod placeholders;

pub use comments::CommentStage;
pub use layout::LayoutStage;
pub use metadata::MetadataStage;
pub use minify::MinifyStage;
pub use partials::PartialStage;
pub use permalink::PermalinkStage;
pub use placeholders::PlaceholderStage;
