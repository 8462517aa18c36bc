//! Regex heuristics for inline markup
//!
//! Two passes over the same family of constructs: [`is_markup_only`] decides
//! whether a line still carries prose once every recognized construct is
//! removed, and [`clean`] strips formatting markers for display while keeping
//! the text content.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants as C;

/// Patterns removed (with their content) when testing a line for markup-only.
/// Order matters: later patterns run on the output of earlier ones, and
/// `<!-- -->` must be consumed before the generic `<...>` tag pattern.
static STRIP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"!\[\[.*?\]\]",   // embeds
        r"!rw-\w+",        // Readwise markers
        r"\[\[.*?\]\]",    // wiki links
        r"\[.*?\]\(.*?\)", // markdown links
        r"`.*?`",          // inline code
        r"\*\*.*?\*\*",    // bold
        r"\*.*?\*",        // italic
        r"==.*?==",        // highlights
        r"%%.*?%%",        // comments
        r"<!--.*?-->",     // HTML comments
        r"<.*?>",          // HTML tags
        r"#{1,6}\s*",      // heading markers
        r"^>\s*",          // blockquote prefix
        r"^[-*+]\s*",      // list bullet prefix
        r"^\d+\.\s*",      // numbered list prefix
        r"^---+$",         // horizontal rule
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid markup pattern"))
    .collect()
});

/// Formatting markers removed for display; the first capture group survives.
static CLEAN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\*\*(.*?)\*\*",     // bold
        r"\*(.*?)\*",         // italic
        r"__(.*?)__",         // bold alternative
        r"_(.*?)_",           // italic alternative
        r"`(.*?)`",           // inline code
        r"\[\[(.*?)\]\]",     // wiki links
        r"\[(.*?)\]\(.*?\)",  // markdown links
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid cleanup pattern"))
    .collect()
});

/// Whether a trimmed, non-empty line is markup with no substantial text.
///
/// After stripping every recognized construct, a line is markup-only when
/// fewer than [`MIN_PROSE_CHARS`](C::MIN_PROSE_CHARS) characters remain or
/// nothing alphabetic is left.
pub fn is_markup_only(line: &str) -> bool {
    let mut cleaned = line.to_string();
    for pattern in STRIP_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    let cleaned = cleaned.trim();
    cleaned.chars().count() < C::MIN_PROSE_CHARS
        || !cleaned.chars().any(char::is_alphabetic)
}

/// Remove inline formatting markers for display, keeping the text content.
pub fn clean(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in CLEAN_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "${1}").into_owned();
    }
    cleaned
}
