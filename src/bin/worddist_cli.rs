//! worddist CLI - minimum word distance in a text document
//!
//! # Examples
//!
//! ```bash
//! # Words between the closest "the" and "farm" (case-insensitive)
//! worddist distance -f pg30.txt the farm
//!
//! # Case-sensitive, with the positions of the closest pair
//! worddist distance -f hamlet.txt -C --positions The Ber
//!
//! # Word counts and the ten most frequent words
//! worddist stats -f hamlet.txt --top 10
//!
//! # Show configuration
//! worddist show-config
//! ```

use clap::Parser;
use worddist::cli::output::{error_json, print_error};
use worddist::cli::{run, Cli, OutputFormat};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let format = cli.format;

    if let Err(e) = run(cli).await {
        match format {
            OutputFormat::Human => print_error(&e.to_string()),
            OutputFormat::Json => println!("{}", error_json(&e.to_string())),
        }
        std::process::exit(1);
    }
}
