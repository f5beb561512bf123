//! Tests for the stats CLI command

use crate::cli::test_helpers::{create_cli_test_config, stats_args};
use crate::common::TestDocument;
use std::path::Path;
use worddist::cli::commands::stats::{execute, summarize};
use worddist::cli::OutputFormat;
use worddist::core::index::CaseMode;
use worddist::core::source::{load_index, DocumentSource};

/// Test stats (human format)
#[tokio::test]
async fn test_stats_human() {
    let config = create_cli_test_config();
    let doc = TestDocument::hamlet();

    let result = execute(stats_args(doc.path(), 5), &config, OutputFormat::Human).await;
    assert!(result.is_ok(), "Stats should succeed: {:?}", result.err());
}

/// Test stats (JSON format)
#[tokio::test]
async fn test_stats_json() {
    let config = create_cli_test_config();
    let doc = TestDocument::hamlet();

    let result = execute(stats_args(doc.path(), 0), &config, OutputFormat::Json).await;
    assert!(result.is_ok(), "Stats (JSON) should succeed");
}

/// Test stats on an empty document
#[tokio::test]
async fn test_stats_empty_document() {
    let config = create_cli_test_config();
    let doc = TestDocument::with_text("");

    let result = execute(stats_args(doc.path(), 3), &config, OutputFormat::Human).await;
    assert!(result.is_ok(), "Empty document is not an error");
}

/// Test stats on a missing file
#[tokio::test]
async fn test_stats_missing_file() {
    let config = create_cli_test_config();

    let result = execute(
        stats_args(Path::new("/nonexistent/book.txt"), 0),
        &config,
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_err());
}

/// Test the summary counts for the Hamlet excerpt
#[test]
fn test_summarize_hamlet() {
    let doc = TestDocument::hamlet();
    let source = DocumentSource::File(doc.path().to_path_buf());
    let index = load_index(&source, CaseMode::Insensitive, &create_cli_test_config().source)
        .unwrap();

    let summary = summarize(&index, &source, 2);
    assert_eq!(summary.total_words, 61);
    assert_eq!(summary.distinct_words, 50);
    assert_eq!(summary.top_words[0].word, "ber");
    assert_eq!(summary.top_words[0].count, 4);
    assert_eq!(summary.top_words[1].word, "fran");
    assert_eq!(summary.top_words[1].count, 3);
}
