//! Core domain logic (protocol-agnostic)
//!
//! This module contains everything that is independent of the
//! command-line surface.
//!
//! # Architecture
//!
//! - **index**: Tokenizer, case normalization, positional index and
//!   distance queries
//! - **source**: Document acquisition (files, stdin, size limits)
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **xdg**: XDG directory handling

pub mod config;
pub mod error;
pub mod index;
pub mod source;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, WordDistError};
pub use index::{CaseMode, PositionIndex, Proximity};
