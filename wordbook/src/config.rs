use std::path::PathBuf;

use clap::Parser;
use dictionary::DictionaryConfig;

use crate::storage::DEFAULT_FAVORITES_PATH;

pub const DEFAULT_MAX_WORD_LENGTH: usize = 50;

/// Look up words, see their meaning, pronunciation and synonyms, and keep a list of favorites
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Dictionary entries endpoint, the word is appended to it
    #[arg(long)]
    pub base_url: Option<String>,

    /// File that saved favorites are appended to
    #[arg(long)]
    pub favorites: Option<PathBuf>,

    /// Longest word accepted at the prompt, in characters
    #[arg(long)]
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub favorites_path: PathBuf,
    pub max_word_length: usize,
}

impl Config {
    /// CLI flags > env vars > defaults
    pub fn resolve(args: Args) -> Self {
        Self::resolve_with(args, |key| std::env::var(key).ok())
    }

    fn resolve_with(args: Args, env: impl Fn(&str) -> Option<String>) -> Self {
        let dictionary = args
            .base_url
            .or_else(|| env("DICTIONARY_BASE_URL"))
            .map(|base_url| DictionaryConfig { base_url })
            .unwrap_or_default();
        let favorites_path = args
            .favorites
            .or_else(|| env("FAVORITES_PATH").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FAVORITES_PATH));
        let max_word_length = args
            .max_length
            .or_else(|| env("MAX_WORD_LENGTH").and_then(|v| v.parse().ok()))
            .filter(|&length| length > 0)
            .unwrap_or(DEFAULT_MAX_WORD_LENGTH);
        Self {
            dictionary,
            favorites_path,
            max_word_length,
        }
    }
}
