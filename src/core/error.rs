//! Custom error types for the cart library

use thiserror::Error;

/// Main error type for the cart library
#[derive(Error, Debug)]
pub enum Error {
    /// Stored cart could not be read or parsed
    #[error("Persistence read error: {0}")]
    PersistenceRead(String),

    /// Storage backend rejected a write
    #[error("Persistence write error: {0}")]
    PersistenceWrite(String),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid data or parameter
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
