use clap::{Parser, Subcommand};

/// mdquote - Random quotes from markdown book-highlight notes
///
/// # Quick Reference
///
/// ## Quotes
///
/// ```bash
/// mdquote                         # Random quote, then keep prompting (y/n)
/// mdquote quote                   # One random quote
/// mdquote quote -i                # Prompt for another quote after each one
/// mdquote --json quote            # Quote with provenance as JSON
/// ```
///
/// ## Browsing
///
/// ```bash
/// mdquote list                    # All book notes with paragraph counts
/// mdquote show "Atomic Habits"    # Every quotable paragraph of one note
/// mdquote link "Atomic Habits"    # Obsidian deep link for one note
/// ```
///
/// ## Books Directory
///
/// Resolution order:
/// 1. `--books <PATH>` flag
/// 2. `MDQUOTE_BOOKS` environment variable
/// 3. `~/Readwise/Books`
///
/// ## Note References
///
/// Notes can be referenced by exact file name ("Deep Work.md"), exact title
/// stem ("Deep Work"), or case-insensitive prefix ("deep w").
#[derive(Parser, Debug)]
#[command(name = "mdquote")]
#[command(version = "0.1.0")]
#[command(about = "Random quotes from markdown book-highlight notes")]
pub struct Cli {
    /// Books directory (default: ~/Readwise/Books or $MDQUOTE_BOOKS)
    #[arg(long, value_name = "PATH")]
    pub books: Option<String>,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a random quote
    #[command(alias = "q")]
    Quote {
        /// Keep prompting for another quote after each one
        #[arg(short, long)]
        interactive: bool,
    },

    /// List book notes with their quotable paragraph counts
    #[command(alias = "ls")]
    List,

    /// Print every quotable paragraph of one note
    #[command(alias = "p")]
    Show {
        /// Note reference (file name, title stem, or prefix)
        note: String,
    },

    /// Print the Obsidian deep link for one note
    Link {
        /// Note reference (file name, title stem, or prefix)
        note: String,
    },
}
