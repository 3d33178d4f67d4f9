//! Session time value object

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Opaque ordering token passed to `open`.
///
/// Not a precise timestamp: two peers only compare times they produced
/// themselves, and wrap-around is tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SessionTime(u32);

impl SessionTime {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Current Unix time in seconds, truncated to 32 bits
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self(secs as u32)
    }
}

impl From<u32> for SessionTime {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
