//! Error types for the game engine
//!
//! None of these are fatal to a running game: the session layer recovers from
//! oracle and storage failures and only reports them through logging.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be between 1 and {max} letters, got {0}", max = crate::core::MAX_WORD_LENGTH)]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

/// Errors raised by session-level operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No word list exists for the requested length.
    #[error("word length {0} is not supported")]
    UnsupportedLength(usize),
}

/// Errors from a remote dictionary lookup
#[derive(Debug, Error)]
pub enum OracleError {
    /// Connection failure, timeout or unreadable response.
    #[error("dictionary request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with something other than found/not-found.
    #[error("dictionary service returned HTTP {0}")]
    Status(u16),
}

/// Errors reading or writing persisted snapshots
#[derive(Debug, Error)]
pub enum StorageError {
    /// No platform data directory could be determined.
    #[error("could not determine a data directory")]
    NoDataDir,

    /// Failed to read the snapshot file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the snapshot file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors saving the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform config directory could be determined.
    #[error("could not determine a config directory")]
    NoConfigDir,

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
