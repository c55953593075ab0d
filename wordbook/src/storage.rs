use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

pub const DEFAULT_FAVORITES_PATH: &str = "favorites.txt";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("couldn't write to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Append-only favorites file, one word per line.
///
/// The file is opened for every write and closed right after, so nothing is
/// held between saves and other writers are tolerated.
pub struct Favorites {
    path: PathBuf,
}

impl Favorites {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn add_word(&self, word: &str) -> Result<(), StorageError> {
        self.append_line(word).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(word, path = %self.path.display(), "saved favorite");
        Ok(())
    }

    fn append_line(&self, word: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // single write so a line is never split between two savers
        file.write_all(format!("{word}\n").as_bytes())?;
        file.flush()
    }
}
