pub mod cli;
pub mod constants;
pub mod context;
pub mod extract;
pub mod frontmatter;
pub mod markdown;
pub mod picker;
pub mod uri;
pub mod vault;

pub use cli::{Cli, Command};
pub use context::{books_path, QuoteContext};
pub use picker::{Quote, QuotePick};
pub use vault::{ResolvedNote, Vault};

/// Get the default books directory path in user's home directory
pub fn default_books_path() -> Option<std::path::PathBuf> {
    dirs::home_dir().map(|p| p.join(constants::DEFAULT_BOOKS_DIR))
}
