use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while working with a cookbook
#[derive(Error, Debug)]
pub enum CookStackError {
    /// A recipe with the same case-insensitive name already exists
    #[error("A recipe named \"{name}\" already exists, please try again")]
    DuplicateName { name: String },

    /// A position outside the current recipe list was given
    #[error("Recipe position {index} is out of range (the book holds {len} recipes)")]
    IndexOutOfRange { index: usize, len: usize },

    /// User-supplied recipe data failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No cookbook file exists at the given path
    #[error("No cookbook file found at {path}")]
    NotFound { path: PathBuf },

    /// The cookbook file could not be decoded
    #[error("Corrupt cookbook data: {0}")]
    CorruptData(String),

    /// The cookbook file was written by an unknown format version
    #[error("Unsupported cookbook format version {found}")]
    UnsupportedVersion { found: u32 },

    /// Filesystem error while saving or loading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<serde_json::Error> for CookStackError {
    fn from(err: serde_json::Error) -> Self {
        CookStackError::CorruptData(err.to_string())
    }
}
