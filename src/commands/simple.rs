//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::game::{Game, Statistics};
use crate::output::{print_game_over, print_guess_result, print_statistics};
use crate::services::WordValidator;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub async fn run_simple<V: WordValidator>(game: Game<V>) -> Result<Statistics> {
    let stdin = BufReader::new(tokio::io::stdin());
    run_simple_with(game, stdin).await
}

/// Run the line-mode game reading commands and guesses from `input`
///
/// Returns the statistics gathered when the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub async fn run_simple_with<V, R>(mut game: Game<V>, input: R) -> Result<Statistics>
where
    V: WordValidator,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                W O R D   G A M E                 ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in six tries.");
    println!(
        "  {} right spot   {} wrong spot   {} not in word",
        " A ".black().on_green(),
        " A ".black().on_yellow(),
        " A ".white().on_bright_black()
    );
    println!("Commands: 'quit' to exit, 'new' for new game, 'stats' for statistics\n");

    loop {
        let turn = game.session().attempt_count() + 1;
        let Some(line) = read_input(&mut lines, &format!("Guess {turn}/6")).await? else {
            println!();
            return Ok(game.stats().clone());
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(game.stats().clone());
            }
            "new" | "n" => {
                next_game(&mut game);
                continue;
            }
            "stats" => {
                print_statistics(game.stats());
                println!();
                continue;
            }
            _ => {}
        }

        match game.submit(&line).await {
            Ok(result) => {
                print_guess_result(&result, &game.session().used_letters().sorted_letters());

                if result.outcome.is_over() {
                    print_game_over(game.session());
                    print_statistics(game.stats());
                    println!();

                    let again = read_input(&mut lines, "Play again? (yes/no)")
                        .await?
                        .unwrap_or_default()
                        .to_lowercase();
                    if again == "yes" || again == "y" {
                        next_game(&mut game);
                    } else {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(game.stats().clone());
                    }
                }
            }
            Err(e) => {
                println!("❌ {}", e.user_message().red());
            }
        }
    }
}

/// Start another game from the word list fetched at start-up
fn next_game<V: WordValidator>(game: &mut Game<V>) {
    game.new_game();
    println!("\n🔄 New game started!\n");
}

/// Prompt and read one trimmed line, `None` at end of input
async fn read_input<R: AsyncBufRead + Unpin>(
    lines: &mut Lines<R>,
    prompt: &str,
) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{AnyWordValidator, StaticWordSource, WordListValidator};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    async fn game_with_answer(answer: &str) -> Game<AnyWordValidator> {
        Game::start(
            StaticWordSource::new(words_from_slice(&[answer])),
            AnyWordValidator,
            StdRng::seed_from_u64(3),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn win_then_quit() {
        let game = game_with_answer("WATER").await;
        let script: &[u8] = b"which\nthere\nwater\nno\n";

        let stats = run_simple_with(game, script).await.unwrap();

        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[3], 1);
    }

    #[tokio::test]
    async fn play_again_after_loss() {
        let game = game_with_answer("WATER").await;
        let script: &[u8] = b"which\nthere\ntheir\nabout\nwould\nthese\nyes\nwater\nn\n";

        let stats = run_simple_with(game, script).await.unwrap();

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[tokio::test]
    async fn invalid_input_does_not_use_attempts() {
        let game = Game::start(
            StaticWordSource::new(words_from_slice(&["WATER"])),
            WordListValidator::new(words_from_slice(&["WATER"])),
            StdRng::seed_from_u64(3),
        )
        .await
        .unwrap();
        let script: &[u8] = b"wat\nxyzzy\n12345\n\nwater\nquit\n";

        let stats = run_simple_with(game, script).await.unwrap();

        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[tokio::test]
    async fn end_of_input_stops_cleanly() {
        let game = game_with_answer("WATER").await;
        let stats = run_simple_with(game, &b"which\n"[..]).await.unwrap();
        assert_eq!(stats.total_games, 0);
    }
}
