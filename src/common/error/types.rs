//! Error type shared by configuration and input decoding.
use thiserror::Error;

/// Main error type for pseudo-table operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parser options that cannot produce a meaningful detection
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Shape records that are not a JSON array at the top level
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration text that is not valid YAML for the options schema
    #[error("YAML error: {0}")]
    Yaml(String),
}

/// Result type for pseudo-table operations.
pub type Result<T> = std::result::Result<T, Error>;
