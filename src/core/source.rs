//! Source document acquisition.
//!
//! Opens the document to index and streams it into a
//! [`PositionIndex`]. The file handle is scoped to the call that
//! builds the index and is released on every exit path, including
//! read errors. Open and read failures keep the underlying
//! `std::io::Error` and are reported as [`WordDistError::Acquisition`].

use crate::core::config::SourceConfig;
use crate::core::error::{Result, WordDistError};
use crate::core::index::{CaseMode, PositionIndex};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Where the document text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl DocumentSource {
    /// `-` selects standard input, anything else is a file path
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            DocumentSource::Stdin
        } else {
            DocumentSource::File(arg.to_path_buf())
        }
    }

    /// Path used in messages
    pub fn display_path(&self) -> PathBuf {
        match self {
            DocumentSource::File(path) => path.clone(),
            DocumentSource::Stdin => PathBuf::from("<stdin>"),
        }
    }
}

/// Open `path` for reading, rejecting files above the size limit.
pub fn open_document(path: &Path, config: &SourceConfig) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| WordDistError::acquisition(path, e))?;
    let size = file
        .metadata()
        .map_err(|e| WordDistError::acquisition(path, e))?
        .len();

    let limit = config.max_file_size_bytes();
    if size > limit {
        tracing::warn!(
            path = %path.display(),
            size,
            limit,
            "Document exceeds size limit"
        );
        return Err(WordDistError::acquisition(
            path,
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "file is {size} bytes, larger than the {} MB limit",
                    config.max_file_size_mb
                ),
            ),
        ));
    }

    tracing::debug!(path = %path.display(), size, "Opened document");
    Ok(BufReader::new(file))
}

/// Build an index from a document on disk
pub fn index_file(path: &Path, mode: CaseMode, config: &SourceConfig) -> Result<PositionIndex> {
    let reader = open_document(path, config)?;
    PositionIndex::from_reader(reader, mode).map_err(|e| into_acquisition(path, e))
}

/// Build an index from any reader, enforcing the same size limit as
/// [`open_document`]
pub fn index_reader<R: Read>(
    reader: R,
    label: &Path,
    mode: CaseMode,
    config: &SourceConfig,
) -> Result<PositionIndex> {
    let limit = config.max_file_size_bytes();
    let mut limited = reader.take(limit.saturating_add(1));
    let mut bytes = Vec::new();
    limited
        .read_to_end(&mut bytes)
        .map_err(|e| WordDistError::acquisition(label, e))?;

    // Size first: the cut at the limit may split a multibyte character
    if bytes.len() as u64 > limit {
        return Err(WordDistError::acquisition(
            label,
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("input is larger than the {} MB limit", config.max_file_size_mb),
            ),
        ));
    }

    let text = String::from_utf8(bytes).map_err(|e| {
        WordDistError::acquisition(label, io::Error::new(io::ErrorKind::InvalidData, e))
    })?;

    tracing::debug!(source = %label.display(), size = text.len(), "Read document");
    Ok(PositionIndex::from_text(&text, mode))
}

/// Build an index from `source`
pub fn load_index(
    source: &DocumentSource,
    mode: CaseMode,
    config: &SourceConfig,
) -> Result<PositionIndex> {
    match source {
        DocumentSource::File(path) => index_file(path, mode, config),
        DocumentSource::Stdin => {
            index_reader(io::stdin().lock(), &source.display_path(), mode, config)
        }
    }
}

/// Build an index from `source` on the blocking thread pool
pub async fn load_index_async(
    source: DocumentSource,
    mode: CaseMode,
    config: SourceConfig,
) -> Result<PositionIndex> {
    let label = source.display_path();
    tokio::task::spawn_blocking(move || load_index(&source, mode, &config))
        .await
        .map_err(|e| WordDistError::acquisition(label, io::Error::other(e)))?
}

fn into_acquisition(path: &Path, err: WordDistError) -> WordDistError {
    match err {
        WordDistError::IoError(source) => WordDistError::acquisition(path, source),
        other => other,
    }
}
