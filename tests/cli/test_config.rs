//! Tests for show-config and completions CLI commands
//!
//! These are simple commands that display static/config information.

use crate::cli::test_helpers::create_cli_test_config;
use clap_complete::Shell;
use worddist::cli::commands::completions::write_completions;
use worddist::cli::commands::config::{execute, ConfigArgs};
use worddist::cli::OutputFormat;

// =============================================================================
// show-config tests
// =============================================================================

/// Test showing config (human format)
#[tokio::test]
async fn test_show_config_human() {
    let config = create_cli_test_config();

    let result = execute(ConfigArgs { all: false }, &config, OutputFormat::Human).await;
    assert!(result.is_ok(), "Show config should succeed");
}

/// Test showing config (JSON format)
#[tokio::test]
async fn test_show_config_json() {
    let config = create_cli_test_config();

    let result = execute(ConfigArgs { all: true }, &config, OutputFormat::Json).await;
    assert!(result.is_ok(), "Show config (JSON) should succeed");
}

// =============================================================================
// completions tests
// =============================================================================

/// Test that completion scripts mention the binary and its commands
#[test]
fn test_bash_completions() {
    let mut out = Vec::new();
    write_completions(Shell::Bash, &mut out).expect("Completions should render");

    let script = String::from_utf8(out).expect("Completions are UTF-8");
    assert!(script.contains("worddist"));
    assert!(script.contains("distance"));
    assert!(script.contains("stats"));
}
