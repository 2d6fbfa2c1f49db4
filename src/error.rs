//! Error types for galaxy generation and particle file I/O.

use thiserror::Error;

/// Result alias used across the crate
pub type GalaxyResult<T> = Result<T, GalaxyError>;

#[derive(Debug, Error)]
pub enum GalaxyError {
    /// Rejected parameters. Raised before any random draw is made.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Scenario file could not be deserialized
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed row in a particle CSV file
    #[error("parse error at line {line}: {message}")]
    Parse {
        line: usize,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GalaxyError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
