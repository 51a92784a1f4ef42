//! Runtime configuration
//!
//! Collected from command-line flags (and their environment fallbacks) in
//! `main`, then used to build the word source and validator.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::services::{
    AnyWordValidator, DEFAULT_DICTIONARY_URL, DEFAULT_WORD_LIST_URL, DatamuseWordSource,
    DictionaryApiValidator, FallbackWordSource, StaticWordSource, WordListValidator, WordSource,
    WordValidator,
};
use crate::wordlists::loader::load_from_file;

/// Settings for one run of the game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub word_list_url: String,
    pub dictionary_url: String,
    pub request_timeout: Duration,
    /// Skip all network access
    pub offline: bool,
    /// Validate guesses against a local list instead of the dictionary API
    pub dictionary_file: Option<PathBuf>,
    /// Seed for answer selection, random when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_list_url: DEFAULT_WORD_LIST_URL.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            offline: false,
            dictionary_file: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reject settings that cannot work
    ///
    /// # Errors
    /// Returns an error for a zero timeout or a non-HTTP URL.
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout.is_zero() {
            bail!("request timeout must be greater than zero");
        }
        for (name, url) in [
            ("word list URL", &self.word_list_url),
            ("dictionary URL", &self.dictionary_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!("{name} must start with http:// or https://, got '{url}'");
            }
        }
        Ok(())
    }

    /// Answer pool source: the online list with built-in fallback, or just the built-in list
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn word_source(&self) -> Result<Box<dyn WordSource>> {
        if self.offline {
            info!("Offline mode: using built-in word list");
            return Ok(Box::new(StaticWordSource::embedded()));
        }

        let online = DatamuseWordSource::new(&self.word_list_url, self.request_timeout)
            .context("Failed to create word list client")?;
        Ok(Box::new(FallbackWordSource::new(online)))
    }

    /// Guess validator: a local list if configured, otherwise the dictionary API
    /// (or accept-all when offline)
    ///
    /// # Errors
    /// Returns an error if the dictionary file cannot be read or the HTTP client
    /// cannot be built.
    pub fn word_validator(&self) -> Result<Box<dyn WordValidator>> {
        if let Some(path) = &self.dictionary_file {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read dictionary file {}", path.display()))?;
            let validator = WordListValidator::new(words);
            if validator.is_empty() {
                bail!("dictionary file {} has no five-letter words", path.display());
            }
            info!("Validating guesses against {} local words", validator.len());
            return Ok(Box::new(validator));
        }

        if self.offline {
            return Ok(Box::new(AnyWordValidator));
        }

        let validator = DictionaryApiValidator::new(&self.dictionary_url, self.request_timeout)
            .context("Failed to create dictionary client")?;
        Ok(Box::new(validator))
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = GameConfig {
            request_timeout: Duration::ZERO,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_http_url_is_rejected() {
        let config = GameConfig {
            dictionary_url: "ftp://example.com".to_string(),
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("dictionary URL"));
    }

    #[tokio::test]
    async fn offline_uses_builtin_list_and_accepts_anything() {
        let config = GameConfig {
            offline: true,
            ..GameConfig::default()
        };
        let words = config.word_source().unwrap().fetch_candidates().await.unwrap();
        assert_eq!(words.len(), crate::wordlists::DEFAULT_WORDS_COUNT);

        let validator = config.word_validator().unwrap();
        let xyzzy = Word::new("XYZZY").unwrap();
        assert!(validator.is_valid_word(&xyzzy).await.unwrap());
    }

    #[tokio::test]
    async fn dictionary_file_takes_priority() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "water\nabout").unwrap();

        let config = GameConfig {
            offline: true,
            dictionary_file: Some(file.path().to_path_buf()),
            ..GameConfig::default()
        };
        let validator = config.word_validator().unwrap();
        assert!(validator.is_valid_word(&Word::new("ABOUT").unwrap()).await.unwrap());
        assert!(!validator.is_valid_word(&Word::new("XYZZY").unwrap()).await.unwrap());
    }

    #[test]
    fn empty_dictionary_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = GameConfig {
            dictionary_file: Some(file.path().to_path_buf()),
            ..GameConfig::default()
        };
        assert!(config.word_validator().is_err());
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        use rand::Rng;

        let config = GameConfig {
            seed: Some(9),
            ..GameConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
