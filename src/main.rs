//! Word Game - CLI
//!
//! Guess the five-letter word in six tries, in a TUI or a plain line mode.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{check_guess, run_simple, start_game},
    config::GameConfig,
    logging::{self, LogTarget},
    output::{print_check_result, print_statistics},
    services::{DEFAULT_DICTIONARY_URL, DEFAULT_WORD_LIST_URL},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// URL returning a JSON array of candidate answers
    #[arg(long, global = true, env = "WORDLE_WORD_LIST_URL", default_value = DEFAULT_WORD_LIST_URL)]
    word_list_url: String,

    /// Base URL of the dictionary lookup service
    #[arg(long, global = true, env = "WORDLE_DICTIONARY_URL", default_value = DEFAULT_DICTIONARY_URL)]
    dictionary_url: String,

    /// Timeout for each network request, in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout_secs: u64,

    /// Use the built-in word list and accept any five-letter guess
    #[arg(long, global = true)]
    offline: bool,

    /// Validate guesses against a local word list (one word per line)
    #[arg(short = 'd', long, global = true)]
    dictionary_file: Option<PathBuf>,

    /// Seed for answer selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a guess against an answer without playing
    Check {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            word_list_url: self.word_list_url.clone(),
            dictionary_url: self.dictionary_url.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
            offline: self.offline,
            dictionary_file: self.dictionary_file.clone(),
            seed: self.seed,
        }
    }

    fn log_target(&self, tui: bool) -> LogTarget<'_> {
        match &self.log_file {
            Some(path) => LogTarget::File(path),
            // Anything on stderr would tear the alternate screen
            None if tui => LogTarget::Disabled,
            None => LogTarget::Stderr,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let tui = matches!(cli.command, None | Some(Commands::Play));
    logging::init(cli.log_target(tui))?;

    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli.game_config()).await,
        Some(Commands::Simple) => run_simple_command(&cli.game_config()).await,
        Some(Commands::Check { guess, answer }) => run_check_command(guess, answer),
    }
}

async fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    config.validate()?;
    let game = start_game(config.word_source()?, config.word_validator()?, config.rng()).await?;
    run_tui(App::new(game)).await
}

async fn run_simple_command(config: &GameConfig) -> Result<()> {
    config.validate()?;
    let game = start_game(config.word_source()?, config.word_validator()?, config.rng()).await?;
    let stats = run_simple(game).await?;

    if stats.total_games > 0 {
        print_statistics(&stats);
        println!();
    }
    Ok(())
}

fn run_check_command(guess: &str, answer: &str) -> Result<()> {
    let result = check_guess(guess, answer)?;
    print_check_result(&result.guess, &result.answer, &result.classification);
    Ok(())
}
