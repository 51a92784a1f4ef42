//! Single-game state machine

use super::GameError;
use crate::core::{Classification, UsedLetterTracker, WORD_LENGTH, Word, WordError, classify};
use tracing::debug;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A scored guess kept in the session history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub classification: Classification,
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub guess: Word,
    pub classification: Classification,
    pub outcome: Outcome,
    pub attempts_remaining: usize,
}

/// Turn raw guess text into a word, reporting problems as game errors
pub(crate) fn parse_guess(text: &str) -> Result<Word, GameError> {
    Word::new(text).map_err(|e| match e {
        WordError::InvalidLength(actual) => GameError::InvalidGuessLength {
            expected: WORD_LENGTH,
            actual,
        },
        WordError::InvalidCharacters => GameError::InvalidGuessCharacters(text.to_string()),
    })
}

/// State of one game: the answer, the guesses so far, and the outcome
///
/// All mutation goes through [`submit_guess`](Self::submit_guess) and
/// [`reset`](Self::reset). A rejected guess leaves the session unchanged.
#[derive(Debug, Clone)]
pub struct GameSession {
    answer: Word,
    outcome: Outcome,
    used_letters: UsedLetterTracker,
    history: Vec<GuessRecord>,
}

impl GameSession {
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            outcome: Outcome::InProgress,
            used_letters: UsedLetterTracker::new(),
            history: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    /// Score a guess and advance the game
    ///
    /// The guess is uppercased before scoring. The game is won when the guess
    /// text equals the answer, and lost when the sixth guess misses.
    ///
    /// # Errors
    /// - `SessionAlreadyEnded` if the game is already won or lost
    /// - `InvalidGuessLength` / `InvalidGuessCharacters` for malformed guesses
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameSession, Outcome};
    ///
    /// let mut session = GameSession::new(Word::new("water").unwrap());
    /// let result = session.submit_guess("water").unwrap();
    /// assert_eq!(result.outcome, Outcome::Won);
    /// assert_eq!(session.attempt_count(), 1);
    /// ```
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessResult, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::SessionAlreadyEnded);
        }

        let guess = parse_guess(guess)?;

        let classification = classify(&guess, &self.answer);
        self.used_letters.record(&guess);
        self.history.push(GuessRecord {
            guess: guess.clone(),
            classification,
        });

        if guess.text() == self.answer.text() {
            self.outcome = Outcome::Won;
        } else if self.attempt_count() == MAX_ATTEMPTS {
            self.outcome = Outcome::Lost;
        }

        debug!(
            guess = %guess,
            result = %classification,
            attempt = self.attempt_count(),
            outcome = ?self.outcome,
            "scored guess"
        );

        Ok(GuessResult {
            guess,
            classification,
            outcome: self.outcome,
            attempts_remaining: self.attempts_remaining(),
        })
    }

    /// Start over with a new answer
    pub fn reset(&mut self, new_answer: Word) {
        self.answer = new_answer;
        self.outcome = Outcome::InProgress;
        self.used_letters.reset();
        self.history.clear();
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// The answer, but only once the game has been lost
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        (self.outcome == Outcome::Lost).then_some(&self.answer)
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempt_count()
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    #[must_use]
    pub const fn used_letters(&self) -> &UsedLetterTracker {
        &self.used_letters
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }
}
