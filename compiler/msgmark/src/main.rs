//! msgmark CLI
//!
//! Inspect how chat messages are tokenized.

use msgmark::commands::lex_file;
use msgmark::{init_tracing, parse_lex_options};
use tracing::debug;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    debug!(command = command.as_str(), "dispatching");

    match command.as_str() {
        "lex" => {
            let options = parse_lex_options(&args[2..]);
            lex_file(&options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("msgmark {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("msgmark: chat message markup inspector");
    println!();
    println!("Usage: msgmark <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex [file|-]         Tokenize a message and display the tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --raw                Show head-parser tokens without merging text");
    println!("  --json               Print one JSON object per token");
    println!("  --default-scheme=<s> Scheme for links written as //host (default: http)");
    println!();
    println!("Examples:");
    println!("  msgmark lex message.txt");
    println!("  echo 'hi :wave:' | msgmark lex --json");
    println!("  msgmark lex message.txt --default-scheme=https");
    println!();
    println!("Set RUST_LOG=msgmark_lexer=trace to see rejected markup candidates.");
}
