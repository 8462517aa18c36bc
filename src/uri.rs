//! Obsidian deep links
//!
//! `obsidian://open?path=<encoded-absolute-path>` opens the note directly in
//! Obsidian. The path is canonicalized first so the link works regardless of
//! how the books directory was specified on the command line.

use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants as C;

/// Standard URI component encoding, with `/` kept as a path separator.
const PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build the Obsidian deep link for a note file.
pub fn obsidian_link(path: &Path) -> String {
    // dunce avoids the \\?\ UNC prefix on Windows, which Obsidian rejects
    let absolute = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let normalized = absolute.to_string_lossy().replace('\\', "/");
    format!(
        "{}{}",
        C::OBSIDIAN_URI_PREFIX,
        utf8_percent_encode(&normalized, PATH_ENCODE_SET)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_link_encodes_spaces_keeps_slashes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Atomic Habits.md");
        fs::write(&path, "content").unwrap();

        let link = obsidian_link(&path);
        assert!(link.starts_with("obsidian://open?path=/"));
        assert!(link.ends_with("Atomic%20Habits.md"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_link_for_missing_file_uses_given_path() {
        let link = obsidian_link(Path::new("/books/missing note.md"));
        assert_eq!(link, "obsidian://open?path=/books/missing%20note.md");
    }
}
