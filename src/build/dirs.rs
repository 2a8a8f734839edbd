//! Well-known directory names and ignore lists.

/// HTML pages to build.
pub const PAGES: &str = "pages";
/// Layout templates wrapping page bodies.
pub const LAYOUTS: &str = "layouts";
/// Fragments included with `{{ partial: name }}`.
pub const PARTIALS: &str = "partials";
/// Static assets copied verbatim.
pub const PUBLIC: &str = "public";
/// Generated site output.
pub const BUILD: &str = "build";

/// Files never copied from the public directory.
pub const IGNORED_FILES: &[&str] = &[
    ".gitignore",
    ".env",
    ".env.local",
    ".env.production",
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    ".git",
    ".gitattributes",
    ".gitkeep",
    ".DS_Store",
    "Thumbs.db",
];

/// Directories skipped during page discovery and asset copying.
pub const IGNORED_DIRECTORIES: &[&str] = &[
    "node_modules",
    ".git",
    ".vscode",
    ".idea",
    ".vs",
    ".next",
    ".nuxt",
    "dist",
    BUILD,
    ".cache",
    LAYOUTS,
];

pub fn is_ignored_file(name: &str) -> bool {
    IGNORED_FILES.iter().any(|f| f.eq_ignore_ascii_case(name))
}

pub fn is_ignored_directory(name: &str) -> bool {
    IGNORED_DIRECTORIES.iter().any(|d| d.eq_ignore_ascii_case(name))
}
