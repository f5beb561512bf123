//! Distance command - minimum word distance between two words

use crate::cli::output::colors;
use crate::cli::{ModeArgs, OutputFormat};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::index::{CaseMode, PositionIndex};
use crate::core::source::{self, DocumentSource};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the distance command
#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// Path of the text file containing the book (`-` for stdin)
    #[arg(long, short = 'f')]
    pub file: PathBuf,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Also print the positions of the closest pair
    #[arg(long, short = 'p')]
    pub positions: bool,

    /// First word
    pub first_word: String,

    /// Second word
    pub second_word: String,
}

/// Distance response
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub first_word: String,
    pub second_word: String,
    pub mode: CaseMode,
    pub distance: usize,
    pub first_position: usize,
    pub second_position: usize,
}

/// Answer a distance query against a built index
pub fn query(index: &PositionIndex, first: &str, second: &str) -> Result<DistanceResponse> {
    let proximity = index.nearest(first, second)?;
    Ok(DistanceResponse {
        first_word: first.to_string(),
        second_word: second.to_string(),
        mode: index.mode(),
        distance: proximity.distance,
        first_position: proximity.first,
        second_position: proximity.second,
    })
}

/// Execute the distance command
///
/// The document is only indexed once it has been opened successfully;
/// acquisition errors surface before any index exists.
pub async fn execute(
    args: DistanceArgs,
    config: &Config,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mode = args.mode.resolve(config.case_mode());
    let source = DocumentSource::from_arg(&args.file);

    let index = source::load_index_async(source, mode, config.source.clone()).await?;
    let response = query(&index, &args.first_word, &args.second_word)?;

    match format {
        OutputFormat::Human => {
            if args.positions {
                println!(
                    "{} {}",
                    response.distance,
                    colors::dim(&format!(
                        "({} at {}, {} at {})",
                        response.first_word,
                        response.first_position,
                        response.second_word,
                        response.second_position
                    ))
                );
            } else {
                println!("{}", response.distance);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
