//! Shared game start-up with a progress spinner

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;

use crate::game::Game;
use crate::services::{WordSource, WordValidator};

/// Fetch the answer pool behind a spinner and start the first game
///
/// # Errors
///
/// Returns an error if the word source fails and has no fallback.
pub async fn start_game<S: WordSource, V: WordValidator>(
    source: S,
    validator: V,
    rng: StdRng,
) -> Result<Game<V>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Fetching word list...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let game = Game::start(source, validator, rng).await;
    spinner.finish_and_clear();

    game.context("Failed to load a word list")
}
