//! Terminal output formatting
//!
//! Display utilities for the line-mode game and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_game_over, print_guess_result, print_statistics};
