//! CLI error type

use thiserror::Error;

use crate::application::{CopyError, UnmarshallError};
use crate::domain::error::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid base64 buffer: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Buffer is {size} bytes, larger than the configured maximum of {max}")]
    BufferTooLarge { size: u64, max: u64 },

    #[error(transparent)]
    Unmarshall(#[from] UnmarshallError),

    #[error(transparent)]
    Copy(#[from] CopyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Clipboard task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for CliError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Task(e.to_string())
    }
}
