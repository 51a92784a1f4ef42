//! Word lists for the game
//!
//! An embedded fallback answer pool plus helpers for loading lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
