//! Tests for the distance CLI command
//!
//! Tests the distance command handler with various scenarios:
//! - Valid queries in both case modes
//! - Query failures (invalid argument, not found)
//! - Acquisition failures (missing file)
//! - Output format variations

use crate::cli::test_helpers::{create_cli_test_config, distance_args};
use crate::common::TestDocument;
use std::path::Path;
use worddist::cli::commands::distance::{execute, query};
use worddist::cli::OutputFormat;
use worddist::core::index::{CaseMode, PositionIndex};
use worddist::WordDistError;

/// Test distance with a valid query (human format)
#[tokio::test]
async fn test_distance_valid_query_human() {
    let config = create_cli_test_config();
    let doc = TestDocument::hamlet();

    let args = distance_args(doc.path(), "The", "Ber", false);
    let result = execute(args, &config, OutputFormat::Human).await;
    assert!(result.is_ok(), "Distance should succeed: {:?}", result.err());
}

/// Test distance with a valid query in JSON format
#[tokio::test]
async fn test_distance_valid_query_json() {
    let config = create_cli_test_config();
    let doc = TestDocument::hamlet();

    let args = distance_args(doc.path(), "The", "Ber", true);
    let result = execute(args, &config, OutputFormat::Json).await;
    assert!(
        result.is_ok(),
        "JSON distance should succeed: {:?}",
        result.err()
    );
}

/// Test distance with the positions flag
#[tokio::test]
async fn test_distance_with_positions() {
    let config = create_cli_test_config();
    let doc = TestDocument::with_text("the cat sat on the mat");

    let mut args = distance_args(doc.path(), "the", "mat", false);
    args.positions = true;
    let result = execute(args, &config, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test that a missing word surfaces as an error message, not a panic
#[tokio::test]
async fn test_distance_word_not_found() {
    let config = create_cli_test_config();
    let doc = TestDocument::hamlet();

    let args = distance_args(doc.path(), "Cookies", "Ber", true);
    let err = execute(args, &config, OutputFormat::Human)
        .await
        .expect_err("Missing word should fail");

    let err = err
        .downcast_ref::<WordDistError>()
        .expect("Query failures are WordDistError");
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Cookies"));
}

/// Test that identical words are rejected
#[tokio::test]
async fn test_distance_same_word() {
    let config = create_cli_test_config();
    let doc = TestDocument::hamlet();

    let args = distance_args(doc.path(), "Ber", "BER", false);
    let err = execute(args, &config, OutputFormat::Human)
        .await
        .expect_err("Same word should fail");
    assert!(err.to_string().contains("Words are the same"));
}

/// Test that an empty word is rejected
#[tokio::test]
async fn test_distance_empty_word() {
    let config = create_cli_test_config();
    let doc = TestDocument::hamlet();

    let args = distance_args(doc.path(), "", "Ber", false);
    let err = execute(args, &config, OutputFormat::Json)
        .await
        .expect_err("Empty word should fail");
    assert!(err.to_string().contains("Invalid word(s) given"));
}

/// Test that a missing file surfaces the I/O error
#[tokio::test]
async fn test_distance_missing_file() {
    let config = create_cli_test_config();

    let args = distance_args(Path::new("/nonexistent/book.txt"), "a", "b", false);
    let err = execute(args, &config, OutputFormat::Human)
        .await
        .expect_err("Missing file should fail");

    let err = err
        .downcast_ref::<WordDistError>()
        .expect("Acquisition failures are WordDistError");
    assert!(err.is_acquisition());
    assert!(err.to_string().contains("/nonexistent/book.txt"));
}

/// Test that the configured default mode applies without flags
#[tokio::test]
async fn test_distance_uses_configured_mode() {
    let mut config = create_cli_test_config();
    config.index.case_sensitive = true;
    let doc = TestDocument::with_text("The cat the dog");

    // "THE" only exists case-insensitively
    let args = distance_args(doc.path(), "THE", "dog", false);
    let result = execute(args, &config, OutputFormat::Human).await;
    assert!(result.is_err(), "Case-sensitive default should not fold THE");

    let mut args = distance_args(doc.path(), "THE", "dog", false);
    args.mode.ignore_case = true;
    let result = execute(args, &config, OutputFormat::Human).await;
    assert!(result.is_ok(), "--ignore-case should override the default");
}

/// Test the response built for output
#[test]
fn test_query_response_fields() {
    let index = PositionIndex::from_text(crate::common::HAMLET_EXCERPT, CaseMode::Sensitive);
    let response = query(&index, "The", "Ber").unwrap();

    assert_eq!(response.distance, 21);
    assert_eq!(response.first_position, 1);
    assert_eq!(response.second_position, 23);
    assert_eq!(response.mode, CaseMode::Sensitive);
}
