//! Clipboard domain module

mod format;
mod time;

pub use format::{ClipboardFormat, ALL_FORMATS, NUM_FORMATS};
pub use time::SessionTime;
