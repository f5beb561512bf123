//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the configuration file is looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    pub default_mode: String,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = if args.all {
        Some(XdgDirs::new().config_file().to_string_lossy().into_owned())
    } else {
        None
    };

    let response = ConfigResponse {
        config_file,
        default_mode: config.case_mode().to_string(),
        config: config.clone(),
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Configuration:"));
            if let Some(path) = &response.config_file {
                println!("  config_file: {}", colors::file_path(path));
            }
            println!("  index:");
            println!(
                "    case_sensitive: {} ({})",
                response.config.index.case_sensitive, response.default_mode
            );
            println!("  source:");
            println!(
                "    max_file_size_mb: {}",
                colors::number(&response.config.source.max_file_size_mb.to_string())
            );
            println!("  logging:");
            println!("    level: {}", response.config.logging.level);
            println!("    json: {}", response.config.logging.json);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
