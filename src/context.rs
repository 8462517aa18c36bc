//! Books directory resolution
//!
//! The books directory is the tool's one external parameter. It resolves from
//! the command line, then the environment, then a home-relative default, so no
//! path is ever hardcoded.

use std::path::PathBuf;

use crate::constants as C;

/// Environment variable overriding the books directory
pub const ENV_BOOKS_DIR: &str = "MDQUOTE_BOOKS";

/// Per-invocation context shared by all subcommands.
#[derive(Debug, Clone)]
pub struct QuoteContext {
    /// The resolved books directory
    pub books: PathBuf,
    /// Whether to output in JSON format
    pub json: bool,
}

impl QuoteContext {
    pub fn new(books: PathBuf, json: bool) -> Self {
        Self { books, json }
    }
}

/// Resolve the books directory: CLI flag, then env var, then default.
pub fn books_path(arg: Option<&str>) -> PathBuf {
    if let Some(path) = arg {
        return PathBuf::from(path);
    }

    // Treat empty strings as unset
    if let Some(path) = std::env::var(ENV_BOOKS_DIR).ok().filter(|s| !s.is_empty()) {
        return PathBuf::from(path);
    }

    crate::default_books_path().unwrap_or_else(|| PathBuf::from(C::DEFAULT_BOOKS_DIR))
}
