//! Property-based tests for classification and game sessions
//!
//! 1. **Letter budget**: a letter is never marked Correct or Present more
//!    often than it occurs in the answer
//! 2. **Exact positions**: Correct appears exactly where guess and answer agree
//! 3. **Session bounds**: a session never holds more than six guesses and
//!    stops accepting guesses once it has ended

use proptest::prelude::*;
use wordle_game::core::{LetterStatus, Word, classify};
use wordle_game::game::{GameError, GameSession, MAX_ATTEMPTS, Outcome};

// Small alphabet so repeated letters are common
fn word() -> impl Strategy<Value = Word> {
    "[A-E]{5}".prop_map(|s| Word::new(s).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_marks_never_exceed_answer_letters(guess in word(), answer in word()) {
        let classification = classify(&guess, &answer);

        for letter in b'A'..=b'E' {
            let marked = guess
                .chars()
                .iter()
                .zip(classification.iter())
                .filter(|&(&c, status)| c == letter && status != LetterStatus::Absent)
                .count();
            let available = answer.chars().iter().filter(|&&c| c == letter).count();
            prop_assert!(marked <= available);
        }
    }

    #[test]
    fn prop_correct_exactly_where_letters_match(guess in word(), answer in word()) {
        let classification = classify(&guess, &answer);

        for i in 0..5 {
            let matches = guess.char_at(i) == answer.char_at(i);
            prop_assert_eq!(classification.status_at(i) == LetterStatus::Correct, matches);
        }
        prop_assert_eq!(classification.is_perfect(), guess == answer);
    }

    #[test]
    fn prop_session_never_exceeds_six_guesses(
        answer in word(),
        guesses in prop::collection::vec(word(), 1..12),
    ) {
        let mut session = GameSession::new(answer.clone());

        for guess in &guesses {
            let was_over = session.is_over();
            let before = session.attempt_count();
            let result = session.submit_guess(guess.text());

            if was_over {
                prop_assert_eq!(result.unwrap_err(), GameError::SessionAlreadyEnded);
                prop_assert_eq!(session.attempt_count(), before);
            } else {
                let result = result.unwrap();
                prop_assert_eq!(session.attempt_count(), before + 1);
                if *guess == answer {
                    prop_assert_eq!(result.outcome, Outcome::Won);
                }
            }
            prop_assert!(session.attempt_count() <= MAX_ATTEMPTS);
        }

        if session.attempt_count() == MAX_ATTEMPTS {
            prop_assert!(session.is_over());
        }
    }

    #[test]
    fn prop_used_letters_cover_every_guess(
        answer in word(),
        guesses in prop::collection::vec(word(), 1..6),
    ) {
        let mut session = GameSession::new(answer);
        for guess in &guesses {
            if session.submit_guess(guess.text()).is_err() {
                break;
            }
        }

        for record in session.history() {
            for &c in record.guess.chars() {
                prop_assert!(session.used_letters().contains(char::from(c)));
            }
        }
        let letters = session.used_letters().sorted_letters();
        prop_assert!(letters.windows(2).all(|w| w[0] < w[1]));
    }
}
