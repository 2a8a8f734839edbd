mod builder;
pub mod dirs;
mod discover;
mod page;
mod paths;
pub mod pipeline;
mod sitemap;

pub use builder::{BuildError, Builder};
pub use page::build_page;
pub use paths::base_path_from_config;
