//! Dictionary Converter
//!
//! Converts a word-frequency CSV into a JavaScript dictionary module with
//! per-word letter counts, for a word-game letter-matching feature.
//!
//! # Quick Start
//!
//! ```rust
//! use dictionary_converter::core::WordEntry;
//! use dictionary_converter::dictionary::emitter::entry_literal;
//!
//! let entry = WordEntry::new("co-op").unwrap();
//! assert_eq!(
//!     entry_literal(&entry),
//!     "{ word: \"co-op\", letters: { c: 1, o: 2, p: 1 } }"
//! );
//! ```

// Core domain types
pub mod core;

// Dictionary input and output
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
