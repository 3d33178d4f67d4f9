//! Clipboard format identifiers

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidFormatError;

/// Number of formats this build understands.
///
/// Ids at or above this value come from a newer peer and are skipped on decode.
pub const NUM_FORMATS: u32 = 3;

/// All known formats in wire order
pub const ALL_FORMATS: [ClipboardFormat; NUM_FORMATS as usize] = [
    ClipboardFormat::Text,
    ClipboardFormat::Html,
    ClipboardFormat::Bitmap,
];

/// Kind of clipboard content.
///
/// The discriminant is the wire id; the set is closed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum ClipboardFormat {
    /// UTF-8 text, newlines as LF
    Text = 0,
    /// UTF-8 HTML fragment
    Html = 1,
    /// Device independent bitmap
    Bitmap = 2,
}

impl ClipboardFormat {
    /// Wire id of this format
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Map a wire id back to a known format.
    ///
    /// Returns `None` for ids outside `0..NUM_FORMATS`.
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Self::Text),
            1 => Some(Self::Html),
            2 => Some(Self::Bitmap),
            _ => None,
        }
    }

    /// Slot index for per-format tables
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Bitmap => "bitmap",
        }
    }
}

impl FromStr for ClipboardFormat {
    type Err = InvalidFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "bitmap" => Ok(Self::Bitmap),
            _ => Err(InvalidFormatError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for ClipboardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
