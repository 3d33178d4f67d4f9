//! Application configuration value object

use serde::{Deserialize, Serialize};

use super::encoding::BufferEncoding;

/// Default upper bound on an input buffer (16 MiB)
pub const DEFAULT_MAX_BUFFER_SIZE: u64 = 16 * 1024 * 1024;

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub encoding: Option<String>,
    pub max_buffer_size: Option<u64>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            encoding: Some(BufferEncoding::default().to_string()),
            max_buffer_size: Some(DEFAULT_MAX_BUFFER_SIZE),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            encoding: other.encoding.or(self.encoding),
            max_buffer_size: other.max_buffer_size.or(self.max_buffer_size),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// Get encoding as parsed BufferEncoding, or default if not set/invalid
    pub fn encoding_or_default(&self) -> BufferEncoding {
        self.encoding
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get max buffer size, or 16 MiB if not set
    pub fn max_buffer_size_or_default(&self) -> u64 {
        self.max_buffer_size.unwrap_or(DEFAULT_MAX_BUFFER_SIZE)
    }

    /// Get log level filter, or "warn" if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
