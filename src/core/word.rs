//! Dictionary word representation
//!
//! A `WordEntry` stores a validated lowercase word along with its letter-frequency map.

use rustc_hash::FxHashMap;
use std::fmt;

/// Minimum accepted word length, in characters
pub const MIN_WORD_LEN: usize = 2;

/// A validated dictionary word paired with its letter-frequency map
///
/// The map holds one entry per distinct letter of the word, keyed by the
/// lowercase ASCII letter, with the number of times it occurs. Hyphen and
/// apostrophe never appear as keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    letters: FxHashMap<u8, u32>,
}

/// Error type for rejected words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    TooShort(usize),
    InvalidCharacter(char),
    RepeatedHyphen,
    RepeatedApostrophe,
    NoLetters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word is empty"),
            Self::TooShort(len) => {
                write!(f, "Word must be at least {MIN_WORD_LEN} characters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Word contains invalid character {ch:?}")
            }
            Self::RepeatedHyphen => write!(f, "Word contains more than one hyphen"),
            Self::RepeatedApostrophe => write!(f, "Word contains more than one apostrophe"),
            Self::NoLetters => write!(f, "Word contains no alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Validate a word's character set
///
/// Accepts only ASCII letters plus at most one hyphen and at most one
/// apostrophe across the whole word. Rejects the empty string.
///
/// This checks characters only; the length filter lives in [`WordEntry::new`].
///
/// # Errors
/// Returns the first `WordError` encountered while scanning left to right.
pub fn validate(word: &str) -> Result<(), WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }

    let mut hyphens = 0;
    let mut apostrophes = 0;

    for ch in word.chars() {
        match ch {
            c if c.is_ascii_alphabetic() => {}
            '-' => {
                hyphens += 1;
                if hyphens > 1 {
                    return Err(WordError::RepeatedHyphen);
                }
            }
            '\'' => {
                apostrophes += 1;
                if apostrophes > 1 {
                    return Err(WordError::RepeatedApostrophe);
                }
            }
            c => return Err(WordError::InvalidCharacter(c)),
        }
    }

    Ok(())
}

/// Check whether a word passes [`validate`]
///
/// # Examples
/// ```
/// use dictionary_converter::core::is_valid_word;
///
/// assert!(is_valid_word("co-op"));
/// assert!(is_valid_word("don't"));
/// assert!(!is_valid_word("co-op-x"));
/// assert!(!is_valid_word("123"));
/// ```
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    validate(word).is_ok()
}

/// Count each alphabetic character of a word, lowercased
///
/// Hyphen and apostrophe are skipped and contribute no key. An input with no
/// alphabetic characters yields an empty map.
#[must_use]
pub fn letter_counts(word: &str) -> FxHashMap<u8, u32> {
    let mut counts = FxHashMap::default();
    for ch in word.to_lowercase().bytes() {
        if ch.is_ascii_alphabetic() {
            *counts.entry(ch).or_insert(0) += 1;
        }
    }
    counts
}

impl WordEntry {
    /// Create a new `WordEntry` from a raw string
    ///
    /// Lowercases the input, then applies the character-set validation and
    /// the minimum-length filter before computing the letter-frequency map.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty or shorter than [`MIN_WORD_LEN`]
    /// - It contains anything other than ASCII letters, `-`, or `'`
    /// - It contains more than one `-` or more than one `'`
    /// - It contains no alphabetic characters at all (e.g. `-'`)
    ///
    /// # Examples
    /// ```
    /// use dictionary_converter::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Co-op").unwrap();
    /// assert_eq!(entry.word(), "co-op");
    /// assert_eq!(entry.count_of(b'o'), 2);
    ///
    /// assert!(WordEntry::new("a").is_err());
    /// assert!(WordEntry::new("naïve").is_err());
    /// ```
    pub fn new(raw: impl Into<String>) -> Result<Self, WordError> {
        let word: String = raw.into().to_lowercase();

        validate(&word)?;

        let len = word.chars().count();
        if len < MIN_WORD_LEN {
            return Err(WordError::TooShort(len));
        }

        let letters = letter_counts(&word);
        if letters.is_empty() {
            return Err(WordError::NoLetters);
        }

        Ok(Self { word, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Get the letter-frequency map
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashMap<u8, u32> {
        &self.letters
    }

    /// Get the occurrence count of a letter, 0 if absent
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u32 {
        self.letters.get(&letter).copied().unwrap_or(0)
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
