//! Positional word index.
//!
//! Maps every normalized word of a document to the ascending list of
//! positions where it occurs, and answers minimum-distance queries
//! between two words with a linear merge over their position lists.
//!
//! # Example
//!
//! ```
//! use worddist::core::index::{CaseMode, PositionIndex};
//!
//! let index = PositionIndex::from_text("the cat sat on the mat", CaseMode::Insensitive);
//!
//! assert_eq!(index.positions("the"), Some(&[1, 5][..]));
//! assert_eq!(index.distance("the", "mat").unwrap(), 0);
//! ```

use crate::core::error::{Result, WordDistError};
use crate::core::index::normalize::CaseMode;
use crate::core::index::tokenizer::{Token, Tokenizer};
use serde::Serialize;
use std::collections::HashMap;
use std::io::BufRead;

/// The closest pair of occurrences of two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Proximity {
    /// Number of words strictly between the two occurrences
    pub distance: usize,

    /// Position of the first word's occurrence
    pub first: usize,

    /// Position of the second word's occurrence
    pub second: usize,
}

/// Immutable word → positions index over a single document.
///
/// Built once from a token stream; there is no write path afterwards,
/// so a built index can be shared across threads and queried
/// concurrently without locking.
#[derive(Debug, Clone)]
pub struct PositionIndex {
    /// Normalized word → strictly increasing, non-empty positions
    entries: HashMap<String, Vec<usize>>,

    /// Highest position seen; the token count for a contiguous stream
    total_words: usize,

    mode: CaseMode,
}

impl PositionIndex {
    /// Build an index from tokens in document order.
    ///
    /// Positions are taken from the tokens as given, so a stream with
    /// gaps keeps its gaps. The word total is the highest position seen.
    /// A token whose position does not increase on the previous one is
    /// skipped, which keeps every position list ascending and bounded by
    /// the total.
    pub fn build<'a, I>(tokens: I, mode: CaseMode) -> Self
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        let mut index = Self {
            entries: HashMap::new(),
            total_words: 0,
            mode,
        };
        index.extend(tokens);
        index.log_built();
        index
    }

    /// Tokenize `text` and build an index over it.
    pub fn from_text(text: &str, mode: CaseMode) -> Self {
        let mut tokenizer = Tokenizer::new();
        Self::build(tokenizer.tokenize(text), mode)
    }

    /// Stream a document line by line into a new index.
    ///
    /// Read failures are returned as-is; no partial index escapes.
    pub fn from_reader<R: BufRead>(mut reader: R, mode: CaseMode) -> Result<Self> {
        let mut index = Self {
            entries: HashMap::new(),
            total_words: 0,
            mode,
        };
        let mut tokenizer = Tokenizer::new();
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            index.extend(tokenizer.tokenize(&line));
        }

        index.log_built();
        Ok(index)
    }

    fn extend<'a, I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        for token in tokens {
            if token.text.is_empty() {
                continue;
            }
            if token.position <= self.total_words {
                tracing::warn!(
                    position = token.position,
                    last = self.total_words,
                    word = token.text,
                    "Skipping out-of-order token"
                );
                continue;
            }

            let key = self.mode.normalize(token.text);
            match self.entries.get_mut(key.as_ref()) {
                Some(positions) => positions.push(token.position),
                None => {
                    self.entries.insert(key.into_owned(), vec![token.position]);
                }
            }
            self.total_words = token.position;
        }
    }

    fn log_built(&self) {
        tracing::info!(
            total_words = self.total_words,
            distinct_words = self.entries.len(),
            mode = %self.mode,
            "Index built"
        );
    }

    /// Case mode used for both indexing and queries
    pub fn mode(&self) -> CaseMode {
        self.mode
    }

    /// Number of distinct normalized words
    pub fn single_word_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of words in the document (the highest indexed position)
    pub fn total_word_count(&self) -> usize {
        self.total_words
    }

    pub fn is_empty(&self) -> bool {
        self.total_words == 0
    }

    /// Ascending positions of `word` (normalized with the index mode)
    pub fn positions(&self, word: &str) -> Option<&[usize]> {
        self.entries
            .get(self.mode.normalize(word).as_ref())
            .map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions(word).is_some()
    }

    /// Iterate over `(normalized word, positions)` in arbitrary order
    pub fn words(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .map(|(word, positions)| (word.as_str(), positions.as_slice()))
    }

    /// The `limit` most frequent words, most frequent first.
    ///
    /// Ties are broken alphabetically so the result is stable.
    pub fn most_frequent(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .words()
            .map(|(word, positions)| (word, positions.len()))
            .collect();
        counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts.truncate(limit);
        counts
    }

    /// Minimum number of words between any occurrence of `first` and
    /// any occurrence of `second`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if either word is empty, or both words are
    ///   the same after normalization
    /// - `NotFound` if either word does not occur in the document
    pub fn distance(&self, first: &str, second: &str) -> Result<usize> {
        self.nearest(first, second).map(|p| p.distance)
    }

    /// Like [`PositionIndex::distance`], also reporting the positions
    /// of the pair that realizes the minimum.
    pub fn nearest(&self, first: &str, second: &str) -> Result<Proximity> {
        if first.is_empty() || second.is_empty() {
            return Err(WordDistError::InvalidArgument(
                "Invalid word(s) given".to_string(),
            ));
        }

        let key1 = self.mode.normalize(first);
        let key2 = self.mode.normalize(second);
        if key1 == key2 {
            return Err(WordDistError::InvalidArgument(
                "Words are the same".to_string(),
            ));
        }

        let lst1 = self
            .entries
            .get(key1.as_ref())
            .ok_or_else(|| WordDistError::NotFound(first.to_string()))?;
        let lst2 = self
            .entries
            .get(key2.as_ref())
            .ok_or_else(|| WordDistError::NotFound(second.to_string()))?;

        let proximity = closest_pair(lst1, lst2, self.total_words)
            .ok_or_else(|| WordDistError::NotFound(first.to_string()))?;

        tracing::debug!(
            first = %key1,
            second = %key2,
            distance = proximity.distance,
            "Distance query"
        );

        Ok(proximity)
    }
}

/// Sweep two ascending position lists for their closest pair.
///
/// Starts from `upper` as the best distance seen and always advances
/// the cursor sitting on the smaller position, which visits every
/// candidate minimizer in `O(a.len() + b.len())`. Returns `None` only
/// if a list is empty. The lists must not share a position.
fn closest_pair(a: &[usize], b: &[usize], upper: usize) -> Option<Proximity> {
    let (&a0, &b0) = (a.first()?, b.first()?);
    let mut best = Proximity {
        distance: upper,
        first: a0,
        second: b0,
    };

    let (mut i1, mut i2) = (0, 0);
    while i1 < a.len() && i2 < b.len() {
        let (p1, p2) = (a[i1], b[i2]);
        let dist = p1.abs_diff(p2).saturating_sub(1);
        if dist < best.distance {
            best = Proximity {
                distance: dist,
                first: p1,
                second: p2,
            };
        }
        if p1 < p2 {
            i1 += 1;
        } else {
            i2 += 1;
        }
    }

    Some(best)
}
