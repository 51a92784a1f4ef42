//! Letter bookkeeping across guesses

use super::classification::{Classification, LetterStatus};
use super::word::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Set of letters that appeared in any guess so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedLetterTracker {
    letters: FxHashSet<u8>,
}

impl UsedLetterTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every letter of `guess`; re-adding is a no-op
    pub fn record(&mut self, guess: &Word) {
        self.letters.extend(guess.chars());
    }

    /// All recorded letters in ascending order
    #[must_use]
    pub fn sorted_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.letters.iter().map(|&b| char::from(b)).collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        u8::try_from(letter.to_ascii_uppercase()).is_ok_and(|b| self.letters.contains(&b))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn reset(&mut self) {
        self.letters.clear();
    }
}

/// Best status seen for each letter, used to colour an on-screen keyboard
///
/// Correct beats Present beats Absent: once a letter has been placed it stays green
/// even if a later guess uses it in the wrong spot.
#[derive(Debug, Clone, Default)]
pub struct LetterHints {
    best: FxHashMap<u8, LetterStatus>,
}

impl LetterHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build hints from a sequence of scored guesses
    pub fn from_history<'a>(
        history: impl IntoIterator<Item = (&'a Word, &'a Classification)>,
    ) -> Self {
        let mut hints = Self::new();
        for (guess, classification) in history {
            hints.update(guess, classification);
        }
        hints
    }

    pub fn update(&mut self, guess: &Word, classification: &Classification) {
        for (&letter, status) in guess.chars().iter().zip(classification.iter()) {
            self.best
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }
    }

    /// Status for a letter, `None` if it has not been guessed
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        let letter = u8::try_from(letter.to_ascii_uppercase()).ok()?;
        self.best.get(&letter).copied()
    }
}
