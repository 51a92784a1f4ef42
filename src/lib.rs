//! Word Game
//!
//! A five-letter word-guessing game with TUI and line-mode front ends. Answers
//! come from an online word list (with a built-in fallback) and guesses are
//! checked against an online dictionary.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::core::{LetterStatus, Word, classify};
//!
//! let guess = Word::new("there").unwrap();
//! let answer = Word::new("water").unwrap();
//!
//! let classification = classify(&guess, &answer);
//! assert_eq!(classification.status_at(2), LetterStatus::Present);
//! println!("{}", classification.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game rules, session state and statistics
pub mod game;

// Word sources and validators
pub mod services;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
