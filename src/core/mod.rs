//! Core domain types for the game
//!
//! Pure types and functions with no I/O: words, per-letter classification,
//! and letter bookkeeping.

mod classification;
mod letters;
mod word;

pub use classification::{Classification, LetterStatus, classify, classify_text};
pub use letters::{LetterHints, UsedLetterTracker};
pub use word::{WORD_LENGTH, Word, WordError};
