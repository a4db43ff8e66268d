//! Error types for the detection service

use thiserror::Error;

use crate::types::Strategy;

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{strategy} detection failed: {message}")]
    Classification { strategy: Strategy, message: String },

    #[error("Detection failed: {0}")]
    MalformedRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Shorthand for a classifier failure in the given strategy.
    pub fn classification(strategy: Strategy, message: impl Into<String>) -> Self {
        Self::Classification {
            strategy,
            message: message.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
