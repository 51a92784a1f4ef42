//! Display functions for game results

use super::formatters::{create_progress_bar, guess_row, used_letters_line};
use crate::core::{Classification, Word};
use crate::game::{GameSession, GuessResult, MAX_ATTEMPTS, Outcome, Statistics};
use colored::Colorize;

/// Print one scored guess with the letters used so far
pub fn print_guess_result(result: &GuessResult, used_letters: &[char]) {
    let attempt = MAX_ATTEMPTS - result.attempts_remaining;
    println!(
        "  {}. {}  {}",
        attempt.to_string().bright_black(),
        guess_row(&result.guess, &result.classification),
        result.classification.to_emoji()
    );
    println!("     {}", used_letters_line(used_letters).bright_black());
}

/// Print the end-of-game banner
pub fn print_game_over(session: &GameSession) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match session.outcome() {
        Outcome::Won => {
            println!("{}", "  🎉 You win! Congratulations! 🎉".bright_green().bold());
            let turns = session.attempt_count();
            println!(
                "  Solved in {} {}",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        Outcome::Lost => {
            let answer = session
                .revealed_answer()
                .map_or_else(String::new, ToString::to_string);
            println!(
                "  {} The word was {}.",
                "Game over!".red().bold(),
                answer.bright_yellow().bold()
            );
        }
        Outcome::InProgress => {}
    }

    println!("\n  Guess history:");
    for (i, record) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.guess.text().bright_white().bold(),
            record.classification.to_emoji()
        );
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print win/loss statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.total_games);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Best streak:     {}", stats.best_streak);

    let max = stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {guesses}: {} {count}", bar.green());
    }
}

/// Print the result of a one-off classification
pub fn print_check_result(guess: &Word, answer: &Word, classification: &Classification) {
    println!(
        "{} vs {}",
        guess.text().bright_white().bold(),
        answer.text().bright_yellow().bold()
    );
    println!("{}  {}", guess_row(guess, classification), classification);
    if classification.is_perfect() {
        println!("{}", "✅ Exact match".green().bold());
    }
}
