use std::io::{self, Write};

use clap::Parser;
use config::{Args, Config};
use dictionary::{Dictionary, LookupResult};
use render::Definition;
use storage::Favorites;
use tracing_subscriber::EnvFilter;
use utilities::{input, parse_command, str_to_bool, Command};

mod config;
mod render;
mod storage;
mod utilities;

/// Used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "wordbook=warn,dictionary=warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::resolve(Args::parse());

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
    tracing::debug!(?config, "starting");

    let dict = Dictionary::with_config(config.dictionary.clone());
    let favorites = Favorites::new(&config.favorites_path);

    println!("{}", render::HINT);
    while let Some(line) = input(">> ")? {
        match parse_command(&line, config.max_word_length) {
            Command::Quit => break,
            Command::Empty => println!("{}", render::HINT),
            Command::TooLong => {
                println!(
                    "Words are limited to {} characters.",
                    config.max_word_length
                );
            }
            Command::Lookup(word) => define_word(&dict, &favorites, word).await?,
        }
    }
    Ok(())
}

async fn define_word(dict: &Dictionary, favorites: &Favorites, word: &str) -> anyhow::Result<()> {
    if show_definition(dict, word, &mut io::stdout()).await?.is_none() {
        return Ok(());
    }

    let answer = input("Save as favorite? (y/N): ")?.unwrap_or_default();
    if str_to_bool(&answer).unwrap_or(false) {
        match favorites.add_word(word) {
            Ok(()) => println!("{}", render::saved(word)),
            Err(error) => eprintln!("Failed to save the word: {error}"),
        }
    }
    Ok(())
}

/// Writes the definition, or only the not-found line when the lookup came back empty.
async fn show_definition(
    dict: &Dictionary,
    word: &str,
    out: &mut impl Write,
) -> io::Result<Option<LookupResult>> {
    match dict.fetch_word(word).await {
        Some(result) => {
            write!(out, "{}", Definition(&result))?;
            Ok(Some(result))
        }
        None => {
            writeln!(out, "{}", render::not_found(word))?;
            Ok(None)
        }
    }
}
