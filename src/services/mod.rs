//! External collaborators: where answers come from and how guesses are checked
//!
//! The game only talks to these traits. HTTP-backed implementations query
//! Datamuse for a frequency-sorted word list and the Free Dictionary API
//! for validation; the local implementations work offline.

mod datamuse;
mod dictionary;
mod fallback;
mod local;

pub use datamuse::{DEFAULT_WORD_LIST_URL, DatamuseWordSource};
pub use dictionary::{DEFAULT_DICTIONARY_URL, DictionaryApiValidator};
pub use fallback::FallbackWordSource;
pub use local::{AnyWordValidator, StaticWordSource, WordListValidator};

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::core::Word;

/// User-Agent sent with every outgoing request
pub(crate) fn user_agent() -> String {
    format!("wordle_game/{}", env!("CARGO_PKG_VERSION"))
}

/// Client with the crate's User-Agent and a per-request timeout
///
/// # Errors
/// Returns an error if the TLS backend cannot be initialised.
pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, ServiceError> {
    Ok(reqwest::Client::builder()
        .user_agent(user_agent())
        .timeout(timeout)
        .build()?)
}

/// Failures talking to an external word service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport-level failure, including timeouts.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with an unexpected status.
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    /// Response body was not in the expected shape.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Service answered but offered no usable five-letter words.
    #[error("word list contained no usable words")]
    EmptyWordList,
}

/// Supplies the pool that answers are drawn from
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn fetch_candidates(&self) -> Result<Vec<Word>, ServiceError>;
}

/// Decides whether a guess is a real word
#[async_trait]
pub trait WordValidator: Send + Sync {
    async fn is_valid_word(&self, word: &Word) -> Result<bool, ServiceError>;
}

#[async_trait]
impl<T: WordSource + ?Sized> WordSource for Box<T> {
    async fn fetch_candidates(&self) -> Result<Vec<Word>, ServiceError> {
        (**self).fetch_candidates().await
    }
}

#[async_trait]
impl<T: WordValidator + ?Sized> WordValidator for Box<T> {
    async fn is_valid_word(&self, word: &Word) -> Result<bool, ServiceError> {
        (**self).is_valid_word(word).await
    }
}
