use std::io;

use mdquote::{uri, QuoteContext, Vault};

pub fn run(ctx: &QuoteContext, note: &str) -> io::Result<()> {
    let vault = Vault::open(&ctx.books)?;
    let path = super::show::resolve_to_path(&vault, note)?;
    let link = uri::obsidian_link(&path);

    if ctx.json {
        println!("{}", serde_json::json!({ "link": link }));
    } else {
        println!("{}", link);
    }
    Ok(())
}
