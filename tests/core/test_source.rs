// Integration tests for document acquisition

use crate::common::{test_config, TestDocument};
use worddist::core::config::SourceConfig;
use worddist::core::index::CaseMode;
use worddist::core::source::{index_file, load_index, DocumentSource};
use worddist::WordDistError;

#[test]
fn test_index_hamlet_from_disk() {
    let doc = TestDocument::hamlet();
    let config = test_config();

    let index = index_file(doc.path(), CaseMode::Insensitive, &config.source).unwrap();
    assert_eq!(index.total_word_count(), 61);
    assert_eq!(index.distance("The", "Ber").unwrap(), 2);
}

#[test]
fn test_load_index_from_document_source() {
    let doc = TestDocument::with_text("The cat the dog");
    let source = DocumentSource::from_arg(doc.path());

    let index = load_index(&source, CaseMode::Sensitive, &SourceConfig::default()).unwrap();
    assert_eq!(index.positions("The"), Some(&[1][..]));
    assert_eq!(index.positions("the"), Some(&[3][..]));
}

#[test]
fn test_missing_file_reports_path_and_io_error() {
    let source = DocumentSource::File("/nonexistent/pg30.txt".into());
    let err = load_index(&source, CaseMode::Insensitive, &SourceConfig::default()).unwrap_err();

    assert!(matches!(err, WordDistError::Acquisition { .. }));
    let message = err.to_string();
    assert!(message.contains("/nonexistent/pg30.txt"), "{message}");
}

#[test]
fn test_size_limit_applies_to_files() {
    let doc = TestDocument::synthetic(400_000);
    let config = SourceConfig {
        max_file_size_mb: 1,
    };

    let err = index_file(doc.path(), CaseMode::Insensitive, &config).unwrap_err();
    assert!(err.is_acquisition());
}
