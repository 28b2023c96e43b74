//! Error types for jzer-core

use thiserror::Error;

/// Result type alias using jzer-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jzer-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input (wrong file type, no selection, bad key)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Media/object storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Message suitable for showing to the operator, without the variant prefix.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(message) | Self::Storage(message) | Self::Config(message) => {
                message.clone()
            }
        }
    }
}
