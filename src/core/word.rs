//! Word representation
//!
//! A Word stores a 5-letter word, normalized to uppercase, for classification and display.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every answer and guess
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, always stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only the letters A-Z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is uppercased. Length is counted in characters, so a
    /// non-ASCII five-character input reports `InvalidCharacters`
    /// rather than a misleading byte length.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("water").unwrap();
    /// assert_eq!(word.text(), "WATER");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = text.to_ascii_uppercase();
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Count of each letter in the word
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
