use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read input '{path}'")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed tag pair at line {line}: {text}")]
    MalformedTag { line: usize, text: String },

    #[error("Invalid criterion '{0}' (expected NAME=PATTERN)")]
    InvalidCriterion(String),

    #[error(transparent)]
    Match(#[from] tagsel_match::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
