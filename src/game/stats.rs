//! Per-run win/loss statistics

use super::MAX_ATTEMPTS;

/// Win/loss record for the current run of the program
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won in `n` guesses
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    pub fn record_win(&mut self, attempts: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(attempts) {
            *slot += 1;
        }
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
