//! worddist - minimum word distance over a text document
//!
//! Builds a positional index over the words of a document and answers
//! "how many words apart are the closest occurrences of these two
//! words?" in time linear in the number of occurrences.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - index (tokenizer, normalization, position index)
//!   - source (file and stdin acquisition)
//!   - config, error, xdg
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - distance, stats, show-config, completions
//!
//! # Example
//!
//! ```
//! use worddist::{CaseMode, PositionIndex};
//!
//! let index = PositionIndex::from_text("a b a", CaseMode::Sensitive);
//! assert_eq!(index.total_word_count(), 3);
//! assert_eq!(index.single_word_count(), 2);
//! assert_eq!(index.distance("a", "b").unwrap(), 0);
//! ```

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, WordDistError};
pub use core::index::{CaseMode, PositionIndex, Proximity, Token, Tokenizer};
pub use core::source::DocumentSource;
