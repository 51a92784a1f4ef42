//! Guess feedback calculation and representation
//!
//! Each position of a guess is classified as:
//! - Correct (letter in the same position in the answer)
//! - Present (letter elsewhere in the answer, respecting remaining occurrences)
//! - Absent (no unconsumed occurrence left in the answer)

use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one guess, aligned with the guess letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification([LetterStatus; WORD_LENGTH]);

impl Classification {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji row like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, classify};
    ///
    /// let guess = Word::new("there").unwrap();
    /// let answer = Word::new("water").unwrap();
    /// assert_eq!(classify(&guess, &answer).to_emoji(), "🟨⬜🟨🟨⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Classify `guess` against `answer`
///
/// Implements the duplicate-letter rules exactly.
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and consume those answer letters
/// 2. Second pass: for every other position, consume the leftmost unconsumed
///    occurrence of the letter in the answer and mark Present, else Absent
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus::*, Word, classify};
///
/// let guess = Word::new("erase").unwrap();
/// let answer = Word::new("speed").unwrap();
/// let result = classify(&guess, &answer);
///
/// assert_eq!(result.statuses(), &[Present, Absent, Absent, Present, Present]);
/// ```
#[must_use]
pub fn classify(guess: &Word, answer: &Word) -> Classification {
    let mut result = [LetterStatus::Absent; WORD_LENGTH];
    let mut remaining: [Option<u8>; WORD_LENGTH] = answer.chars().map(Some);

    // First pass: Correct letters consume their own answer slot
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.char_at(i) == answer.char_at(i) {
            result[i] = LetterStatus::Correct;
            remaining[i] = None;
        }
    }

    // Second pass: Present letters consume the leftmost remaining occurrence
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        let letter = guess.char_at(i);
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
            *slot = None;
            result[i] = LetterStatus::Present;
        }
    }

    Classification(result)
}

/// Classify raw text, validating both words first
///
/// # Errors
/// Returns the `WordError` of whichever input is not a well-formed word.
pub fn classify_text(guess: &str, answer: &str) -> Result<Classification, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(classify(&guess, &answer))
}
