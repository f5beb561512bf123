//! Word normalization.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// How words are compared when indexing and querying.
///
/// The same normalization is applied at build time and at query
/// time; index keys are always normalized words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// Words are kept as written
    Sensitive,
    /// Words are lowercase-folded
    #[default]
    Insensitive,
}

impl CaseMode {
    /// Pick the mode from a `case_sensitive` flag
    pub fn from_flag(case_sensitive: bool) -> Self {
        if case_sensitive {
            CaseMode::Sensitive
        } else {
            CaseMode::Insensitive
        }
    }

    pub fn is_case_sensitive(self) -> bool {
        self == CaseMode::Sensitive
    }

    /// Normalize a word for use as an index key.
    ///
    /// Borrows when the word is already in normal form.
    pub fn normalize(self, word: &str) -> Cow<'_, str> {
        match self {
            CaseMode::Sensitive => Cow::Borrowed(word),
            CaseMode::Insensitive if word.chars().any(|c| c.to_lowercase().ne([c])) => {
                Cow::Owned(word.to_lowercase())
            }
            CaseMode::Insensitive => Cow::Borrowed(word),
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMode::Sensitive => write!(f, "case-sensitive"),
            CaseMode::Insensitive => write!(f, "case-insensitive"),
        }
    }
}
