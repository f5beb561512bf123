//! Word tokenization.
//!
//! Splits text into maximal runs of word characters (Unicode `\w`:
//! letters, marks, digits and connector punctuation such as `_`).
//! Every run of non-word characters is a single separator, so
//! consecutive punctuation or whitespace never yields an empty token.
//!
//! # Example
//!
//! ```
//! use worddist::core::index::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::new();
//! let words: Vec<_> = tokenizer
//!     .tokenize("Who's there?")
//!     .map(|t| (t.position, t.text))
//!     .collect();
//!
//! assert_eq!(words, vec![(1, "Who"), (2, "s"), (3, "there")]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// A word together with its 1-based ordinal position in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// 1-based position; 0 is never assigned
    pub position: usize,

    /// The raw (un-normalized) word
    pub text: &'a str,
}

/// Stateful word tokenizer.
///
/// The position counter survives across calls to [`Tokenizer::tokenize`],
/// so a document fed one line at a time gets the same positions as
/// the whole text fed at once.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    emitted: usize,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize a chunk of text, continuing the position sequence.
    ///
    /// Chunks must be split on separator characters (line breaks are
    /// fine); a word cut in two by the caller becomes two tokens.
    /// Tokens borrow `text` only, not the tokenizer.
    pub fn tokenize<'s, 'a>(
        &'s mut self,
        text: &'a str,
    ) -> impl Iterator<Item = Token<'a>> + use<'s, 'a> {
        WORD.find_iter(text).map(move |m| {
            self.emitted += 1;
            Token {
                position: self.emitted,
                text: m.as_str(),
            }
        })
    }

    /// Number of tokens emitted so far (equals the last position).
    pub fn position_count(&self) -> usize {
        self.emitted
    }
}

/// Tokenize a complete text in one go.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(text).collect()
}
