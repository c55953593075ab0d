use std::fmt;

use dictionary_api::{get_definition, DICTIONARY_API_URL};

mod dictionary;
mod dictionary_api;

pub use dictionary::{
    LookupResult, PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning, NO_PRONUNCIATION,
};

/// Why a lookup produced nothing. [`Dictionary::fetch_word`] folds all of these into `None`.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("request failed: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("malformed response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("dictionary responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("word not found: {0}")]
    NotFound(NotFoundError),
    #[error("response contained no entries")]
    Empty,
}

#[derive(Debug)]
pub struct NotFoundError {
    message: String,
}

impl NotFoundError {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str("no definitions")
        } else {
            f.write_str(&self.message)
        }
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// Entries endpoint; the word is appended as the last path segment.
    pub base_url: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: DICTIONARY_API_URL.to_owned(),
        }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    config: DictionaryConfig,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_config(DictionaryConfig::default())
    }

    pub fn with_config(config: DictionaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// One request, no retry. Keeps the reason a lookup failed.
    pub async fn lookup(&self, word: &str) -> Result<LookupResult, DictionaryError> {
        get_definition(&self.client, &self.config.base_url, word).await
    }

    /// Like [`Dictionary::lookup`], but every failure becomes `None`.
    ///
    /// The reason is only logged at `debug`; callers show their own not-found text.
    pub async fn fetch_word(&self, word: &str) -> Option<LookupResult> {
        match self.lookup(word).await {
            Ok(result) => Some(result),
            Err(DictionaryError::NotFound(error)) => {
                tracing::debug!(word, %error, "no definitions found");
                None
            }
            Err(error) => {
                tracing::debug!(word, %error, "lookup failed");
                None
            }
        }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
