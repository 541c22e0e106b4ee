use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordSetError {
    /// The word list could not be opened.
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the word list failed part way through.
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    /// A word in the list is longer than the longest word that can be stored.
    #[error("word {word:?} is longer than {max} characters")]
    WordTooLong { word: String, max: usize },

    /// Only ASCII words can be stored.
    #[error("word {word:?} is not ASCII")]
    InvalidWord { word: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
