//! Configuration management for worddist.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, WordDistError};
use crate::core::index::CaseMode;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Indexing configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Index case-sensitively when `-C` is not given
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Source document configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Maximum document size in MB (larger files are rejected)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level when neither WORDDIST_LOG nor RUST_LOG is set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit log lines as JSON
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_max_file_size() -> u64 {
    64
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl SourceConfig {
    /// Size limit in bytes
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| WordDistError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. WORDDIST_CONFIG env var
    /// 2. XDG config file (~/.config/worddist/config.toml)
    /// 3. ./worddist.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("WORDDIST_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("worddist.toml").exists() {
                Self::from_file("worddist.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(value) = env::var("WORDDIST_CASE_SENSITIVE") {
            match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.index.case_sensitive = true,
                "0" | "false" | "no" | "off" => self.index.case_sensitive = false,
                _ => {}
            }
        }

        if let Ok(max_size) = env::var("WORDDIST_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.source.max_file_size_mb = size;
            }
        }

        if let Ok(level) = env::var("WORDDIST_LOG_LEVEL") {
            self.logging.level = level.trim().to_ascii_lowercase();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.source.max_file_size_mb == 0 {
            return Err(WordDistError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(WordDistError::ConfigError(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Default case mode when the command line does not pick one
    pub fn case_mode(&self) -> CaseMode {
        CaseMode::from_flag(self.index.case_sensitive)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Default mode: {}", self.case_mode());
        tracing::debug!("  Max file size: {} MB", self.source.max_file_size_mb);
        tracing::debug!("  Log level: {}", self.logging.level);
    }
}
