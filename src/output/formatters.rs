//! Formatting utilities for terminal output

use crate::core::{Classification, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// One letter as a coloured tile, e.g. " W " on green
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ").bold();
    match status {
        LetterStatus::Correct => tile.black().on_green(),
        LetterStatus::Present => tile.black().on_yellow(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn guess_row(guess: &Word, classification: &Classification) -> String {
    guess
        .chars()
        .iter()
        .zip(classification.iter())
        .map(|(&letter, status)| letter_tile(char::from(letter), status).to_string())
        .collect()
}

/// "Used Letters: A C E" line
#[must_use]
pub fn used_letters_line(letters: &[char]) -> String {
    let joined = letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("Used Letters: {joined}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
