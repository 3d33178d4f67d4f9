//! Domain error types

use thiserror::Error;

/// Error when an unknown clipboard format name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid format: \"{input}\". Valid formats are: text, html, bitmap")]
pub struct InvalidFormatError {
    pub input: String,
}

/// Error when an unknown buffer encoding is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid encoding: \"{input}\". Valid encodings are: raw, base64")]
pub struct InvalidEncodingError {
    pub input: String,
}

/// Error when a marshalled buffer cannot be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("Truncated buffer: needed {needed} bytes at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Payload for format {id} is {len} bytes, larger than the wire allows")]
    PayloadTooLarge { id: u32, len: usize },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
