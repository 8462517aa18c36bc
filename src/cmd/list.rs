use std::fs;
use std::io;

use serde::Serialize;

use mdquote::{extract, QuoteContext, Vault};

#[derive(Debug, Serialize)]
struct BookEntry {
    file: String,
    title: String,
    paragraphs: usize,
}

pub fn run(ctx: &QuoteContext) -> io::Result<()> {
    let vault = Vault::open(&ctx.books)?;
    let files = vault.markdown_files()?;

    let mut entries = Vec::new();
    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Skipping {}: {}", path.display(), err);
                continue;
            }
        };
        entries.push(BookEntry {
            file: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            title: extract::book_title(&content),
            paragraphs: extract::paragraphs(&content).len(),
        });
    }

    if ctx.json {
        let rendered = serde_json::to_string_pretty(&entries)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        println!("{}", rendered);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No book notes found in {}", vault.root().display());
        return Ok(());
    }
    for entry in &entries {
        println!(
            "{} ({} quotable) - {}",
            entry.title, entry.paragraphs, entry.file
        );
    }
    Ok(())
}
