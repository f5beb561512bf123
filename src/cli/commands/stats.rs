//! Stats command - word counts for a document

use crate::cli::output::{colors, format_count, print_warning};
use crate::cli::{ModeArgs, OutputFormat};
use crate::core::config::Config;
use crate::core::index::{CaseMode, PositionIndex};
use crate::core::source::{self, DocumentSource};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Path of the text file containing the book (`-` for stdin)
    #[arg(long, short = 'f')]
    pub file: PathBuf,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Also list the N most frequent words
    #[arg(long, short = 't', default_value = "0")]
    pub top: usize,
}

/// Frequency of one word
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Stats response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub source: String,
    pub mode: CaseMode,
    pub total_words: usize,
    pub distinct_words: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_words: Vec<WordFrequency>,
}

/// Summarize a built index
pub fn summarize(index: &PositionIndex, source: &DocumentSource, top: usize) -> StatsResponse {
    StatsResponse {
        source: source.display_path().to_string_lossy().into_owned(),
        mode: index.mode(),
        total_words: index.total_word_count(),
        distinct_words: index.single_word_count(),
        top_words: index
            .most_frequent(top)
            .into_iter()
            .map(|(word, count)| WordFrequency {
                word: word.to_string(),
                count,
            })
            .collect(),
    }
}

/// Execute the stats command
pub async fn execute(
    args: StatsArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = args.mode.resolve(config.case_mode());
    let source = DocumentSource::from_arg(&args.file);

    let index = source::load_index_async(source.clone(), mode, config.source.clone()).await?;
    let response = summarize(&index, &source, args.top);
    if index.is_empty() {
        print_warning(&format!("{} contains no words", response.source));
    }

    match format {
        OutputFormat::Human => {
            println!(
                "{} ({})",
                colors::label(&response.source),
                colors::dim(&response.mode.to_string())
            );
            println!(
                "  Total words:    {}",
                colors::number(&format_count(response.total_words))
            );
            println!(
                "  Distinct words: {}",
                colors::number(&format_count(response.distinct_words))
            );

            if !response.top_words.is_empty() {
                println!("  Most frequent:");
                let width = response
                    .top_words
                    .iter()
                    .map(|w| w.word.chars().count())
                    .max()
                    .unwrap_or(0);
                for (rank, entry) in response.top_words.iter().enumerate() {
                    println!(
                        "    {:>3}. {} {}",
                        rank + 1,
                        colors::word(&format!("{:<width$}", entry.word)),
                        colors::number(&format_count(entry.count)),
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
