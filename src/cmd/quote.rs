use std::io::{self, BufRead, Write};

use rand::Rng;

use mdquote::constants as C;
use mdquote::{picker, Quote, QuoteContext, QuotePick, Vault};

pub fn run(ctx: &QuoteContext, interactive: bool) -> io::Result<()> {
    let vault = Vault::open(&ctx.books)?;
    let mut rng = rand::thread_rng();

    print_pick(ctx, &vault, &mut rng)?;

    if interactive {
        let stdin = io::stdin();
        prompt_loop(ctx, &vault, &mut rng, stdin.lock())?;
    }
    Ok(())
}

/// Keep offering quotes until the reader declines or stdin closes.
fn prompt_loop(
    ctx: &QuoteContext,
    vault: &Vault,
    rng: &mut impl Rng,
    input: impl BufRead,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        print!("{}", C::ANOTHER_QUOTE_PROMPT);
        io::stdout().flush()?;

        let answer = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => {
                println!();
                print_pick(ctx, vault, rng)?;
            }
            _ => {
                println!("{}", C::FAREWELL);
                break;
            }
        }
    }
    Ok(())
}

fn print_pick(ctx: &QuoteContext, vault: &Vault, rng: &mut impl Rng) -> io::Result<()> {
    match picker::random_quote(vault, rng)? {
        QuotePick::Quote(quote) => print_quote(ctx, &quote)?,
        QuotePick::NoFiles => {
            println!("No markdown files found in {}", vault.root().display());
        }
        QuotePick::NoContent => {
            println!("No suitable content found in your book notes.");
        }
    }
    Ok(())
}

fn print_quote(ctx: &QuoteContext, quote: &Quote) -> io::Result<()> {
    if ctx.json {
        let rendered = serde_json::to_string_pretty(quote)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", "=".repeat(C::QUOTE_RULE_WIDTH));
    println!();
    println!("From: {}", quote.book);
    if let Some(author) = &quote.author {
        println!("By:   {}", author);
    }
    println!("File: {}", quote.file);
    println!("Open in Obsidian: {}", quote.link);
    println!();
    println!("{}", "-".repeat(C::QUOTE_RULE_WIDTH));
    println!();
    println!("{}", quote.text);
    println!();
    println!("{}", "-".repeat(C::QUOTE_RULE_WIDTH));
    Ok(())
}
