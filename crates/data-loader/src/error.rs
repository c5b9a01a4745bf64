//! Error types for the data-loader crate.
//!
//! Loading is the only fallible step of a browsing session: once a
//! [`Dataset`](crate::Dataset) exists, every downstream computation is total.

use thiserror::Error;

/// Errors that can occur while loading the film dataset
///
/// Any of these is terminal for a session. The caller renders an error
/// state instead of the film list; no partial data is ever shown.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Dataset file could not be found
    #[error("Dataset not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the dataset
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a JSON array of film records
    ///
    /// Carries serde's message, which includes line and column.
    #[error("Malformed dataset: {reason}")]
    Malformed { reason: String },

    /// The background fetch task died before handing back the bytes
    #[error("Dataset fetch interrupted: {0}")]
    FetchInterrupted(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed {
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, LoadError>;
