//! Paragraph extraction from book-highlight notes
//!
//! Separates substantial prose from markup noise in semi-structured markdown.
//! Each line outside the frontmatter block is classified into exactly one
//! [`LineKind`]; runs of consecutive prose lines are joined into paragraphs and
//! kept only when long enough to be quotable.

use crate::constants as C;
use crate::markdown;

/// Classification of a single trimmed line.
///
/// The variants are checked in a fixed priority order; the first match wins.
/// Everything except `Prose` terminates an in-progress paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#`-prefixed line (headings, but also bare `#tag` lines)
    Heading,
    /// Empty after trimming
    Blank,
    /// Code fence marker (```)
    CodeFence,
    /// `>` blockquote
    Blockquote,
    /// `- ` or `* ` unordered list item
    Bullet,
    /// `1. ` numbered list item (first-item form only)
    NumberedItem,
    /// `![[...]]` embed
    Embed,
    /// `!rw-` Readwise marker
    ReadwiseMarker,
    /// `![...](...)` image
    Image,
    /// A line that is exactly `---`
    HorizontalRule,
    /// `==` highlight
    Highlight,
    /// `%%` comment
    Comment,
    /// `<!--` HTML comment
    HtmlComment,
    /// Any other `<`-prefixed tag
    HtmlTag,
    /// A short standalone `[[...]]` line
    WikiLinkOnly,
    /// Candidate prose
    Prose,
}

impl LineKind {
    /// Whether this line terminates a paragraph instead of contributing to one.
    pub fn is_skippable(self) -> bool {
        self != LineKind::Prose
    }
}

/// Classify one line. The caller must pass the line already trimmed.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with('#') {
        LineKind::Heading
    } else if line.is_empty() {
        LineKind::Blank
    } else if line.starts_with("```") {
        LineKind::CodeFence
    } else if line.starts_with('>') {
        LineKind::Blockquote
    } else if line.starts_with("- ") || line.starts_with("* ") {
        LineKind::Bullet
    } else if line.starts_with("1. ") {
        LineKind::NumberedItem
    } else if line.starts_with("![[") {
        LineKind::Embed
    } else if line.starts_with("!rw-") {
        LineKind::ReadwiseMarker
    } else if line.starts_with("![") {
        LineKind::Image
    } else if line == C::FRONTMATTER_FENCE {
        LineKind::HorizontalRule
    } else if line.starts_with("==") {
        LineKind::Highlight
    } else if line.starts_with("%%") {
        LineKind::Comment
    } else if line.starts_with("<!--") {
        LineKind::HtmlComment
    } else if line.starts_with('<') {
        LineKind::HtmlTag
    } else if line.starts_with("[[")
        && line.ends_with("]]")
        && line.chars().count() < C::WIKI_LINK_MAX_CHARS
    {
        LineKind::WikiLinkOnly
    } else {
        LineKind::Prose
    }
}

/// Extract the qualifying paragraphs of a note, in document order.
///
/// A paragraph is a maximal run of consecutive prose lines joined by single
/// spaces; it qualifies when the joined text exceeds
/// [`MIN_PARAGRAPH_CHARS`](C::MIN_PARAGRAPH_CHARS) characters. Prose lines that
/// turn out to be pure markup are dropped without breaking the run, so the
/// surrounding lines still merge into one paragraph.
///
/// A frontmatter block at the very top is excluded entirely. If the opening
/// fence is never closed the rest of the document is skipped; that matches the
/// historical behavior this extractor is required to reproduce.
pub fn paragraphs(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut in_frontmatter = false;

    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim();

        if i == 0 && line == C::FRONTMATTER_FENCE {
            in_frontmatter = true;
            continue;
        }
        if in_frontmatter {
            if line == C::FRONTMATTER_FENCE {
                in_frontmatter = false;
            }
            continue;
        }

        if classify(line).is_skippable() {
            flush(&mut buffer, &mut out);
            continue;
        }

        if !markdown::is_markup_only(line) {
            buffer.push(line);
        }
    }

    flush(&mut buffer, &mut out);
    out
}

/// Finalize the accumulated lines into a paragraph if it is long enough.
fn flush(buffer: &mut Vec<&str>, out: &mut Vec<String>) {
    if buffer.is_empty() {
        return;
    }
    let text = buffer.join(" ").trim().to_string();
    if text.chars().count() > C::MIN_PARAGRAPH_CHARS {
        out.push(text);
    }
    buffer.clear();
}

/// Extract the book title: the first `# ` heading outside frontmatter.
///
/// Falls back to [`UNKNOWN_BOOK_TITLE`](C::UNKNOWN_BOOK_TITLE) when the note
/// has no level-one heading.
pub fn book_title(content: &str) -> String {
    let mut in_frontmatter = false;

    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim();

        if i == 0 && line == C::FRONTMATTER_FENCE {
            in_frontmatter = true;
            continue;
        }
        if in_frontmatter {
            if line == C::FRONTMATTER_FENCE {
                in_frontmatter = false;
            }
            continue;
        }

        if let Some(title) = line.strip_prefix("# ") {
            return title.trim().to_string();
        }
    }

    C::UNKNOWN_BOOK_TITLE.to_string()
}
