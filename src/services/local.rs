//! Offline word sources and validators

use async_trait::async_trait;
use rustc_hash::FxHashSet;

use super::{ServiceError, WordSource, WordValidator};
use crate::core::Word;
use crate::wordlists::{DEFAULT_WORDS, loader::words_from_slice};

/// A fixed answer pool held in memory
#[derive(Debug, Clone)]
pub struct StaticWordSource {
    words: Vec<Word>,
}

impl StaticWordSource {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The built-in list shipped with the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(DEFAULT_WORDS))
    }
}

#[async_trait]
impl WordSource for StaticWordSource {
    async fn fetch_candidates(&self) -> Result<Vec<Word>, ServiceError> {
        if self.words.is_empty() {
            return Err(ServiceError::EmptyWordList);
        }
        Ok(self.words.clone())
    }
}

/// Accepts only words contained in a known list
#[derive(Debug, Clone, Default)]
pub struct WordListValidator {
    words: FxHashSet<Word>,
}

impl WordListValidator {
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl WordValidator for WordListValidator {
    async fn is_valid_word(&self, word: &Word) -> Result<bool, ServiceError> {
        Ok(self.words.contains(word))
    }
}

/// Accepts every well-formed word
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyWordValidator;

#[async_trait]
impl WordValidator for AnyWordValidator {
    async fn is_valid_word(&self, _word: &Word) -> Result<bool, ServiceError> {
        Ok(true)
    }
}
