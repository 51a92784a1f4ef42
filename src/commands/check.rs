//! One-off classification of a guess against an answer

use crate::core::{Classification, Word, classify};
use crate::game::{GameError, parse_guess};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub answer: Word,
    pub classification: Classification,
}

/// Classify `guess` against `answer` without starting a game
///
/// # Errors
///
/// Returns an error if either word is not five letters A-Z.
pub fn check_guess(guess: &str, answer: &str) -> Result<CheckResult, GameError> {
    let guess = parse_guess(guess)?;
    let answer = parse_guess(answer)?;
    let classification = classify(&guess, &answer);

    Ok(CheckResult {
        guess,
        answer,
        classification,
    })
}
