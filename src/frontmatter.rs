//! YAML frontmatter handling
//!
//! Book notes exported from Readwise open with a `---` fenced YAML block
//! carrying metadata such as the author. The block is never part of the
//! extracted text; this module only reads it for provenance display.

use serde::Deserialize;

use crate::constants as C;
use crate::markdown;

/// Extract the raw frontmatter block, without the fence lines.
///
/// Returns `None` when the document does not open with a fence, when the
/// fence is never closed, or when the block exceeds the parse size limit.
pub fn block(content: &str) -> Option<String> {
    let mut lines = content.lines();
    if lines.next()?.trim() != C::FRONTMATTER_FENCE {
        return None;
    }

    let mut buffer = String::new();
    for line in lines {
        if line.trim() == C::FRONTMATTER_FENCE {
            return Some(buffer);
        }
        buffer.push_str(line);
        buffer.push('\n');
        if buffer.len() > C::MAX_FRONTMATTER_SIZE {
            return None;
        }
    }
    None
}

/// The `author` field appears both as a scalar and as a list in exports.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AuthorField {
    One(String),
    Many(Vec<String>),
}

/// Metadata read from a note's frontmatter.
///
/// Unknown keys are ignored and malformed YAML degrades to the default, so a
/// broken block never fails note processing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteMeta {
    author: Option<AuthorField>,
}

impl NoteMeta {
    /// Parse metadata from full note content.
    pub fn parse(content: &str) -> NoteMeta {
        block(content)
            .and_then(|raw| serde_yaml::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// The author(s) as one display string, wiki-link brackets removed.
    pub fn author(&self) -> Option<String> {
        let joined = match self.author.as_ref()? {
            AuthorField::One(name) => name.clone(),
            AuthorField::Many(names) => names.join(", "),
        };
        let cleaned = markdown::clean(joined.trim());
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_extraction() {
        let content = "---\nauthor: Jane Doe\ntags: [books]\n---\n# Title\n";
        assert_eq!(
            block(content),
            Some("author: Jane Doe\ntags: [books]\n".to_string())
        );
    }

    #[test]
    fn test_block_absent_or_unclosed() {
        assert_eq!(block("# No frontmatter\n"), None);
        assert_eq!(block("---\nauthor: Jane Doe\n"), None);
    }

    #[test]
    fn test_author_scalar() {
        let meta = NoteMeta::parse("---\nauthor: Jane Doe\n---\n");
        assert_eq!(meta.author(), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_author_wiki_linked() {
        let meta = NoteMeta::parse("---\nauthor: \"[[Jane Doe]]\"\n---\n");
        assert_eq!(meta.author(), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_author_list() {
        let meta = NoteMeta::parse("---\nauthor:\n  - Jane Doe\n  - John Roe\n---\n");
        assert_eq!(meta.author(), Some("Jane Doe, John Roe".to_string()));
    }

    #[test]
    fn test_missing_author() {
        let meta = NoteMeta::parse("---\ncategory: books\n---\n");
        assert_eq!(meta.author(), None);
        let meta = NoteMeta::parse("# No frontmatter at all\n");
        assert_eq!(meta.author(), None);
    }

    #[test]
    fn test_malformed_yaml_degrades_to_default() {
        let meta = NoteMeta::parse("---\n: : not yaml : :\n---\n");
        assert_eq!(meta.author(), None);
    }
}
