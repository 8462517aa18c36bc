use std::fs;
use std::io;
use std::path::PathBuf;

use mdquote::frontmatter::NoteMeta;
use mdquote::{extract, markdown, QuoteContext, ResolvedNote, Vault};

pub fn run(ctx: &QuoteContext, note: &str) -> io::Result<()> {
    let vault = Vault::open(&ctx.books)?;
    let path = resolve_to_path(&vault, note)?;
    let content = fs::read_to_string(&path)?;

    let title = extract::book_title(&content);
    let author = NoteMeta::parse(&content).author();
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let paragraphs: Vec<String> = extract::paragraphs(&content)
        .iter()
        .map(|paragraph| markdown::clean(paragraph))
        .collect();

    if ctx.json {
        let rendered = serde_json::json!({
            "file": file,
            "title": title,
            "author": author,
            "paragraphs": paragraphs,
        });
        println!("{}", rendered);
        return Ok(());
    }

    println!("From: {}", title);
    if let Some(author) = author {
        println!("By:   {}", author);
    }
    println!("File: {}", file);

    if paragraphs.is_empty() {
        println!();
        println!("No quotable paragraphs.");
        return Ok(());
    }
    for (i, paragraph) in paragraphs.iter().enumerate() {
        println!();
        println!("[{}] {}", i + 1, paragraph);
    }
    Ok(())
}

/// Resolve a note reference or fail with a message naming the candidates.
pub fn resolve_to_path(vault: &Vault, reference: &str) -> io::Result<PathBuf> {
    match vault.resolve_note(reference)? {
        ResolvedNote::Found(path) => Ok(path),
        ResolvedNote::Ambiguous(matches) => {
            let names: Vec<String> = matches
                .iter()
                .map(|path| {
                    path.file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default()
                })
                .collect();
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Ambiguous note reference '{}': {}",
                    reference,
                    names.join(", ")
                ),
            ))
        }
        ResolvedNote::NotFound => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Note '{}' not found", reference),
        )),
    }
}
