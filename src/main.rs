use clap::Parser;
use mdquote::{books_path, Cli, Command, QuoteContext};

fn main() {
    let cli = Cli::parse();
    let books = books_path(cli.books.as_deref());
    let ctx = QuoteContext::new(books, cli.json);

    // Bare `mdquote` behaves like the interactive quote loop
    let command = cli.command.unwrap_or(Command::Quote { interactive: true });

    let result = match command {
        Command::Quote { interactive } => cmd::quote::run(&ctx, interactive),
        Command::List => cmd::list::run(&ctx),
        Command::Show { note } => cmd::show::run(&ctx, &note),
        Command::Link { note } => cmd::link::run(&ctx, &note),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

mod cmd {
    pub mod link;
    pub mod list;
    pub mod quote;
    pub mod show;
}
