//! Datamuse word list client.
//!
//! `sp=?????` asks for five-character spellings, `md=f&fo=freq` sorts by
//! corpus frequency so the pool leans towards common words.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::{debug, info};

use super::{ServiceError, WordSource, http_client};
use crate::core::Word;

/// Default endpoint: up to 500 frequency-sorted five-letter words
pub const DEFAULT_WORD_LIST_URL: &str =
    "https://api.datamuse.com/words?sp=?????&max=500&md=f&fo=freq";

#[derive(Debug, Deserialize)]
struct DatamuseEntry {
    word: String,
}

/// Fetches the answer pool from Datamuse.
pub struct DatamuseWordSource {
    client: Client,
    url: String,
}

impl DatamuseWordSource {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        Ok(Self {
            client: http_client(timeout)?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl WordSource for DatamuseWordSource {
    async fn fetch_candidates(&self) -> Result<Vec<Word>, ServiceError> {
        debug!("Fetching word list from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        let words = parse_word_list(&body)?;
        info!("Fetched {} candidate words", words.len());
        Ok(words)
    }
}

/// Parse a Datamuse response body into unique words
///
/// Entries that are not five plain letters (Datamuse happily returns
/// "a lot" or "x-ray" for `?????`) are dropped.
fn parse_word_list(body: &str) -> Result<Vec<Word>, ServiceError> {
    let entries: Vec<DatamuseEntry> = serde_json::from_str(body)?;

    let mut seen = FxHashSet::default();
    let words: Vec<Word> = entries
        .into_iter()
        .filter_map(|entry| Word::new(&entry.word).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect();

    if words.is_empty() {
        return Err(ServiceError::EmptyWordList);
    }
    Ok(words)
}
