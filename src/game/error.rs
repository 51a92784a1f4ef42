use thiserror::Error;

use crate::core::Word;
use crate::services::ServiceError;

/// Rejections raised by a [`GameSession`](super::GameSession)
///
/// Every variant is raised before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("guess must be {expected} letters, got {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },
    #[error("guess '{0}' must contain only the letters A-Z")]
    InvalidGuessCharacters(String),
    #[error("game already ended")]
    SessionAlreadyEnded,
}

/// Why a guess submitted through [`Game`](super::Game) was not scored
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("{0} is not a valid word")]
    NotAWord(Word),
    #[error("could not check {word}: {source}")]
    ValidationFailed {
        word: Word,
        #[source]
        source: ServiceError,
    },
}

impl SubmitError {
    /// Short message suitable for showing to the player
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Game(GameError::InvalidGuessLength { expected, .. }) => {
                format!("Please enter a {expected}-letter word.")
            }
            Self::Game(GameError::InvalidGuessCharacters(_)) => {
                "Use letters only, try again.".to_string()
            }
            Self::Game(GameError::SessionAlreadyEnded) => {
                "The game is over. Start a new game to keep playing.".to_string()
            }
            Self::NotAWord(_) => "Not a valid word, try again.".to_string(),
            Self::ValidationFailed { .. } => "An error occurred. Please try again.".to_string(),
        }
    }
}
