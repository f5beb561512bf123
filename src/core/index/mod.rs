//! Positional word indexing.
//!
//! Turns a document into a queryable word → positions index:
//!
//! - Unicode word tokenization with 1-based positions
//! - Case-sensitive or case-insensitive normalization
//! - Linear-time minimum-distance queries between two words
//!
//! # Invariants
//!
//! Every position list is strictly ascending, non-empty, and bounded
//! by the total word count. Index keys are always normalized with the
//! index's [`CaseMode`], and the same normalization is applied to
//! query words.

pub mod normalize;
pub mod position_index;
pub mod tokenizer;

pub use normalize::CaseMode;
pub use position_index::{PositionIndex, Proximity};
pub use tokenizer::{tokenize, Token, Tokenizer};
