//! CLI adapter for worddist
//!
//! Provides the command-line interface over the core index. Only this
//! module knows about argument parsing, output formats and process
//! exit codes; `core/` never depends on it.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use crate::core::config::LoggingConfig;
use crate::core::index::CaseMode;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// worddist - minimum word distance in a text document
///
/// Index a document and ask how many words separate the closest
/// occurrences of two words.
#[derive(Parser, Debug)]
#[command(name = "worddist")]
#[command(version)]
#[command(about = "Word distance tool", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Case-sensitivity selection shared by commands that build an index
#[derive(Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Case sensitive search
    #[arg(short = 'C', long = "case-sensitive")]
    pub case_sensitive: bool,

    /// Case insensitive search (overrides a case-sensitive config default)
    #[arg(short = 'i', long = "ignore-case", conflicts_with = "case_sensitive")]
    pub ignore_case: bool,
}

impl ModeArgs {
    /// Resolve the mode, falling back to the configured default
    pub fn resolve(&self, default: CaseMode) -> CaseMode {
        if self.case_sensitive {
            CaseMode::Sensitive
        } else if self.ignore_case {
            CaseMode::Insensitive
        } else {
            default
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the minimum number of words between two words
    Distance(commands::DistanceArgs),

    /// Show word counts for a document
    Stats(commands::StatsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  worddist completions bash > ~/.local/share/bash-completion/completions/worddist
    ///   zsh:   worddist completions zsh > ~/.zfunc/_worddist
    ///   fish:  worddist completions fish > ~/.config/fish/completions/worddist.fish
    Completions(commands::CompletionsArgs),
}

/// Install the tracing subscriber (stderr only; stdout carries results).
///
/// `WORDDIST_LOG` takes precedence over `RUST_LOG`, which takes
/// precedence over the configured level. Safe to call more than once.
pub fn init_logging(config: &LoggingConfig, verbose: bool) {
    let default_level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_env("WORDDIST_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("worddist={default_level}")));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false);

    // A subscriber may already be installed (tests, embedding callers)
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Handle completions command early (doesn't need configuration)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    init_logging(&config.logging, cli.verbose);
    config.log_config();

    match cli.command {
        Commands::Distance(args) => commands::distance::execute(args, &config, cli.format).await,
        Commands::Stats(args) => commands::stats::execute(args, &config, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
