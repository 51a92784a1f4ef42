//! Free Dictionary API validator.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::{ServiceError, WordValidator, http_client};
use crate::core::Word;

/// Default lookup endpoint; the word is appended as the last path segment
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Checks guesses against dictionaryapi.dev.
///
/// A 2xx answer means the word exists, 404 means it does not. Anything else
/// is reported as an error so the caller can tell "not a word" apart from
/// "could not ask".
pub struct DictionaryApiValidator {
    client: Client,
    base_url: String,
}

impl DictionaryApiValidator {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    fn lookup_url(&self, word: &Word) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            word.text().to_ascii_lowercase()
        )
    }
}

#[async_trait]
impl WordValidator for DictionaryApiValidator {
    async fn is_valid_word(&self, word: &Word) -> Result<bool, ServiceError> {
        let url = self.lookup_url(word);
        let status = self.client.get(&url).send().await?.status();
        debug!("Dictionary lookup {} -> {}", word, status);

        if status.is_success() {
            Ok(true)
        } else if status == StatusCode::NOT_FOUND {
            Ok(false)
        } else {
            Err(ServiceError::Status {
                status: status.as_u16(),
                url,
            })
        }
    }
}
