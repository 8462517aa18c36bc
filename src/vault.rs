//! Book vault access
//!
//! A vault is one flat directory of `.md` book notes. Listing is
//! non-recursive: only direct children count, matching how Readwise lays out
//! its export folder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants as C;

/// Handle to an existing books directory.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

/// Resolution result for a note reference.
#[derive(Debug, Clone)]
pub enum ResolvedNote {
    /// Single file found
    Found(PathBuf),
    /// Multiple candidates (ambiguous)
    Ambiguous(Vec<PathBuf>),
    /// Not found
    NotFound,
}

impl Vault {
    /// Open a vault, failing with a descriptive error when the directory is
    /// missing.
    pub fn open(root: &Path) -> io::Result<Vault> {
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Books directory '{}' not found", root.display()),
            ));
        }
        Ok(Vault {
            root: root.to_path_buf(),
        })
    }

    /// The vault root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All markdown files directly under the root, sorted by name.
    pub fn markdown_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let is_markdown = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(C::MARKDOWN_EXTENSION));
            if is_markdown {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Resolve a note reference to a file path.
    ///
    /// Resolution rules (in order):
    /// 1. Exact file name ("Atomic Habits.md")
    /// 2. Exact file stem ("Atomic Habits")
    /// 3. Case-insensitive stem prefix ("atomic")
    pub fn resolve_note(&self, reference: &str) -> io::Result<ResolvedNote> {
        let reference = reference.trim();
        let files = self.markdown_files()?;

        for path in &files {
            if file_name_str(path) == reference {
                return Ok(ResolvedNote::Found(path.clone()));
            }
        }

        for path in &files {
            if file_stem_str(path) == reference {
                return Ok(ResolvedNote::Found(path.clone()));
            }
        }

        let prefix = reference.to_lowercase();
        let mut matches: Vec<PathBuf> = files
            .into_iter()
            .filter(|path| file_stem_str(path).to_lowercase().starts_with(&prefix))
            .collect();

        match matches.len() {
            0 => Ok(ResolvedNote::NotFound),
            1 => Ok(ResolvedNote::Found(matches.remove(0))),
            _ => Ok(ResolvedNote::Ambiguous(matches)),
        }
    }
}

fn file_name_str(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem_str(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
