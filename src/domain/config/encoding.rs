//! Buffer file encoding value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidEncodingError;

/// How marshalled buffers are stored in files and pipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferEncoding {
    /// Bytes exactly as marshalled
    #[default]
    Raw,
    /// Standard base64, for text-only transports
    Base64,
}

impl BufferEncoding {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Base64 => "base64",
        }
    }
}

impl FromStr for BufferEncoding {
    type Err = InvalidEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "base64" => Ok(Self::Base64),
            _ => Err(InvalidEncodingError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for BufferEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
