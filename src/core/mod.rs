//! Core domain types for dictionary conversion
//!
//! This module contains the fundamental domain types with zero I/O dependencies.
//! All types here are pure, testable, and have clear contracts.

mod word;

pub use word::{MIN_WORD_LEN, WordEntry, WordError, is_valid_word, letter_counts, validate};
