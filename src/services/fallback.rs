//! Built-in word list fallback for an unreliable source

use async_trait::async_trait;
use tracing::warn;

use super::{ServiceError, StaticWordSource, WordSource};
use crate::core::Word;

/// Wraps a word source and falls back to the built-in list when it fails
///
/// Never returns an error as long as the fallback list is non-empty.
pub struct FallbackWordSource<P> {
    primary: P,
    fallback: StaticWordSource,
}

impl<P: WordSource> FallbackWordSource<P> {
    pub fn new(primary: P) -> Self {
        Self::with_fallback(primary, StaticWordSource::embedded())
    }

    pub const fn with_fallback(primary: P, fallback: StaticWordSource) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: WordSource> WordSource for FallbackWordSource<P> {
    async fn fetch_candidates(&self) -> Result<Vec<Word>, ServiceError> {
        match self.primary.fetch_candidates().await {
            Ok(words) if !words.is_empty() => Ok(words),
            Ok(_) => {
                warn!("Word list was empty, using built-in list");
                self.fallback.fetch_candidates().await
            }
            Err(e) => {
                warn!("Error fetching word list, using built-in list: {e}");
                self.fallback.fetch_candidates().await
            }
        }
    }
}
