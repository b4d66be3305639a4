//! Tokenizes a Luna source file and prints one token per line.
//!
//! Exercises `luna_lex::try_tokenize_file` end to end, matching how a real
//! consumer (an editor plugin, a parser driver) would call the crate: read
//! a path from disk, handle the `ParseError` explicitly, and walk the
//! resulting token stream.

use std::process::ExitCode;

use clap::Parser;
use luna_lex::{EntryStack, Symbol};

#[derive(Parser)]
#[command(about = "Tokenize a Luna source file")]
struct Args {
    /// Path to the Luna source file to tokenize.
    path: std::path::PathBuf,

    /// Print only a one-line summary (token count) instead of every token.
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match luna_lex::try_tokenize_file(EntryStack::new(), &args.path) {
        Ok(tokens) => {
            if args.quiet {
                println!("{} tokens", tokens.len());
            } else {
                for token in &tokens {
                    print_token(token);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_token(token: &luna_lex::Token<Symbol>) {
    println!(
        "{:>4} +{:<3} {:?}",
        token.span.chars(),
        token.offset.chars(),
        token.element
    );
}
