//! Game driver
//!
//! Owns the collaborators and the session. Every guess goes through the
//! validator before it reaches the session, and `submit` takes `&mut self`,
//! so one game never has two validations in flight.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

use super::{
    GameError, GameSession, GuessResult, Outcome, Statistics, SubmitError, parse_guess,
};
use crate::core::{LetterHints, Word};
use crate::services::{ServiceError, WordSource, WordValidator};

/// A running game with its answer pool, validator and statistics
pub struct Game<V> {
    validator: V,
    pool: Vec<Word>,
    rng: StdRng,
    session: GameSession,
    stats: Statistics,
}

impl<V: WordValidator> Game<V> {
    /// Fetch the answer pool and start the first game
    ///
    /// # Errors
    /// Returns the source's error, or `EmptyWordList` if it returned nothing.
    pub async fn start<S: WordSource>(
        source: S,
        validator: V,
        mut rng: StdRng,
    ) -> Result<Self, ServiceError> {
        let pool = source.fetch_candidates().await?;
        let answer = pick_answer(&pool, &mut rng)?;
        info!("Starting game with a pool of {} words", pool.len());
        debug!("Answer: {answer}");

        Ok(Self {
            validator,
            pool,
            rng,
            session: GameSession::new(answer),
            stats: Statistics::default(),
        })
    }

    /// Abandon the current game and start another from the cached pool
    ///
    /// An unfinished game counts as a loss.
    pub fn new_game(&mut self) {
        if !self.session.is_over() && self.session.attempt_count() > 0 {
            self.stats.record_loss();
        }

        // The pool is never empty once `start` has succeeded
        if let Ok(answer) = pick_answer(&self.pool, &mut self.rng) {
            debug!("Answer: {answer}");
            self.session.reset(answer);
        }
    }

    /// Validate and score a guess typed by the player
    ///
    /// Leading/trailing whitespace is ignored and the guess is uppercased.
    /// Shape errors are reported before the validator is asked. A negative
    /// or failed validation leaves the session exactly as it was.
    ///
    /// # Errors
    /// - `SubmitError::Game` for an ended game or a malformed guess
    /// - `SubmitError::NotAWord` if the validator rejects the guess
    /// - `SubmitError::ValidationFailed` if the validator could not be reached
    pub async fn submit(&mut self, input: &str) -> Result<GuessResult, SubmitError> {
        if self.session.is_over() {
            return Err(GameError::SessionAlreadyEnded.into());
        }

        let guess = parse_guess(input.trim())?;

        match self.validator.is_valid_word(&guess).await {
            Ok(true) => {}
            Ok(false) => {
                debug!("Rejected {guess}: not in dictionary");
                return Err(SubmitError::NotAWord(guess));
            }
            Err(source) => {
                warn!("Error validating word {guess}: {source}");
                return Err(SubmitError::ValidationFailed {
                    word: guess,
                    source,
                });
            }
        }

        let result = self.session.submit_guess(guess.text())?;

        match result.outcome {
            Outcome::Won => {
                self.stats.record_win(self.session.attempt_count());
                info!("Won in {} guesses", self.session.attempt_count());
            }
            Outcome::Lost => {
                self.stats.record_loss();
                info!("Lost, the word was {}", self.session.answer());
            }
            Outcome::InProgress => {}
        }

        Ok(result)
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Best status per letter over the current game's guesses
    #[must_use]
    pub fn hints(&self) -> LetterHints {
        LetterHints::from_history(
            self.session
                .history()
                .iter()
                .map(|record| (&record.guess, &record.classification)),
        )
    }
}

/// Uniform-random pick from the pool
fn pick_answer(pool: &[Word], rng: &mut StdRng) -> Result<Word, ServiceError> {
    pool.choose(rng).cloned().ok_or(ServiceError::EmptyWordList)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::services::{
        AnyWordValidator, FallbackWordSource, StaticWordSource, WordListValidator,
    };
    use crate::wordlists::loader::words_from_slice;
    use async_trait::async_trait;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct UnreachableValidator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WordValidator for UnreachableValidator {
        async fn is_valid_word(&self, _word: &Word) -> Result<bool, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ServiceError::Status {
                status: 500,
                url: "http://dictionary.invalid".to_string(),
            })
        }
    }

    fn single_word(answer: &str) -> StaticWordSource {
        StaticWordSource::new(words_from_slice(&[answer]))
    }

    async fn water_game() -> Game<AnyWordValidator> {
        Game::start(single_word("WATER"), AnyWordValidator, StdRng::seed_from_u64(7))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn start_picks_from_pool() {
        let game = water_game().await;
        assert_eq!(game.session().answer().text(), "WATER");
        assert_eq!(game.pool_len(), 1);
    }

    #[tokio::test]
    async fn start_fails_on_empty_pool() {
        let result = Game::start(
            StaticWordSource::new(Vec::new()),
            AnyWordValidator,
            StdRng::seed_from_u64(7),
        )
        .await;
        assert!(matches!(result, Err(ServiceError::EmptyWordList)));
    }

    #[tokio::test]
    async fn seeded_games_pick_the_same_answers() {
        let start = || {
            Game::start(
                StaticWordSource::embedded(),
                AnyWordValidator,
                StdRng::seed_from_u64(42),
            )
        };
        let mut a = start().await.unwrap();
        let mut b = start().await.unwrap();

        for _ in 0..5 {
            assert_eq!(a.session().answer(), b.session().answer());
            a.new_game();
            b.new_game();
        }
    }

    #[tokio::test]
    async fn winning_sequence_updates_stats() {
        let mut game = water_game().await;

        game.submit("which").await.unwrap();
        game.submit(" there ").await.unwrap();
        let result = game.submit("WATER").await.unwrap();

        assert_eq!(result.outcome, Outcome::Won);
        assert_eq!(game.session().attempt_count(), 3);
        assert_eq!(game.stats().games_won, 1);
        assert_eq!(game.stats().guess_distribution[3], 1);
    }

    #[tokio::test]
    async fn rejected_word_changes_nothing() {
        let validator = WordListValidator::new(words_from_slice(&["WATER", "WHICH"]));
        let mut game = Game::start(single_word("WATER"), validator, StdRng::seed_from_u64(1))
            .await
            .unwrap();

        game.submit("WHICH").await.unwrap();
        let err = game.submit("XYZZY").await.unwrap_err();

        assert!(matches!(err, SubmitError::NotAWord(ref w) if w.text() == "XYZZY"));
        assert_eq!(err.user_message(), "Not a valid word, try again.");
        assert_eq!(game.session().attempt_count(), 1);
        assert!(!game.session().used_letters().contains('X'));
    }

    #[tokio::test]
    async fn validator_failure_is_treated_as_invalid() {
        let validator = UnreachableValidator {
            calls: AtomicUsize::new(0),
        };
        let mut game = Game::start(single_word("WATER"), validator, StdRng::seed_from_u64(1))
            .await
            .unwrap();

        let err = game.submit("WATER").await.unwrap_err();

        assert!(matches!(err, SubmitError::ValidationFailed { .. }));
        assert_eq!(game.session().attempt_count(), 0);
        assert_eq!(game.session().outcome(), Outcome::InProgress);
    }

    #[tokio::test]
    async fn malformed_guess_skips_validator() {
        let validator = UnreachableValidator {
            calls: AtomicUsize::new(0),
        };
        let mut game = Game::start(single_word("WATER"), validator, StdRng::seed_from_u64(1))
            .await
            .unwrap();

        let err = game.submit("WAT").await.unwrap_err();

        assert!(matches!(
            err,
            SubmitError::Game(GameError::InvalidGuessLength {
                expected: 5,
                actual: 3
            })
        ));
        assert_eq!(err.user_message(), "Please enter a 5-letter word.");
        assert_eq!(game.validator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn loss_then_new_game() {
        let mut game = water_game().await;
        for guess in ["WHICH", "THERE", "THEIR", "ABOUT", "WOULD", "THESE"] {
            game.submit(guess).await.unwrap();
        }

        assert_eq!(game.session().outcome(), Outcome::Lost);
        assert!(matches!(
            game.submit("WATER").await,
            Err(SubmitError::Game(GameError::SessionAlreadyEnded))
        ));
        assert_eq!(game.stats().total_games, 1);

        game.new_game();
        assert_eq!(game.session().attempt_count(), 0);
        assert_eq!(game.session().outcome(), Outcome::InProgress);
        assert!(game.session().used_letters().is_empty());
        assert_eq!(game.stats().total_games, 1);
    }

    #[tokio::test]
    async fn abandoning_a_started_game_counts_as_loss() {
        let mut game = water_game().await;
        game.new_game();
        assert_eq!(game.stats().total_games, 0);

        game.submit("THERE").await.unwrap();
        game.new_game();
        assert_eq!(game.stats().total_games, 1);
        assert_eq!(game.stats().current_streak, 0);
    }

    #[tokio::test]
    async fn hints_follow_history() {
        let mut game = water_game().await;
        game.submit("TOWER").await.unwrap();

        let hints = game.hints();
        assert_eq!(hints.status('E'), Some(LetterStatus::Correct));
        assert_eq!(hints.status('O'), Some(LetterStatus::Absent));
        assert_eq!(hints.status('Q'), None);
    }

    /// Online list that works once and then starts failing
    struct FlakySource {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl WordSource for FlakySource {
        async fn fetch_candidates(&self) -> Result<Vec<Word>, ServiceError> {
            if self.fetches.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(words_from_slice(&["WATER", "THERE", "WHICH"]))
            } else {
                Err(ServiceError::Status {
                    status: 503,
                    url: "http://words.invalid".to_string(),
                })
            }
        }
    }

    #[tokio::test]
    async fn new_games_reuse_the_fetched_pool() {
        let source = FlakySource {
            fetches: AtomicUsize::new(0),
        };
        let mut game = Game::start(
            FallbackWordSource::new(source),
            AnyWordValidator,
            StdRng::seed_from_u64(5),
        )
        .await
        .unwrap();
        assert_eq!(game.pool_len(), 3);

        for _ in 0..10 {
            game.new_game();
            assert!(["WATER", "THERE", "WHICH"].contains(&game.session().answer().text()));
        }

        // The built-in list never replaced the fetched one
        assert_eq!(game.pool_len(), 3);
    }
}
