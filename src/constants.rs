//! Constants for mdquote
//!
//! This module contains the magic numbers, format strings, and hardcoded values
//! used throughout the codebase to improve maintainability and avoid duplication.

// === File and Directory Names ===

/// File extension for book notes (compared against `Path::extension`)
pub const MARKDOWN_EXTENSION: &str = "md";

/// Default books directory relative to the user's home
pub const DEFAULT_BOOKS_DIR: &str = "Readwise/Books";

// === Extraction Thresholds ===

/// A joined paragraph must exceed this many characters to qualify
pub const MIN_PARAGRAPH_CHARS: usize = 100;

/// A line with fewer remaining characters after markup stripping is markup-only
pub const MIN_PROSE_CHARS: usize = 20;

/// A standalone `[[...]]` line shorter than this is treated as a link, not prose
pub const WIKI_LINK_MAX_CHARS: usize = 50;

/// Fence line that opens and closes YAML frontmatter
pub const FRONTMATTER_FENCE: &str = "---";

/// Maximum size of frontmatter to parse (prevents DoS on malformed files)
pub const MAX_FRONTMATTER_SIZE: usize = 64 * 1024; // 64KB

// === Titles ===

/// Sentinel title for notes without a `# ` heading
pub const UNKNOWN_BOOK_TITLE: &str = "Unknown Book";

// === Quote Selection ===

/// Number of random files tried before giving up on finding content
pub const MAX_QUOTE_ATTEMPTS: usize = 10;

// === Deep Links ===

/// URI prefix understood by Obsidian; the percent-encoded path is appended
pub const OBSIDIAN_URI_PREFIX: &str = "obsidian://open?path=";

// === Display ===

/// Width of the rule lines around a displayed quote
pub const QUOTE_RULE_WIDTH: usize = 80;

/// Prompt shown in the interactive loop
pub const ANOTHER_QUOTE_PROMPT: &str = "Another quote? (y/n): ";

/// Farewell printed when the interactive loop ends
pub const FAREWELL: &str = "Happy reading!";
