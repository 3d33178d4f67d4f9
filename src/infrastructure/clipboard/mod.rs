//! Clipboard infrastructure module
//!
//! Provides the in-memory staging clipboard and the cross-platform system
//! clipboard adapter using arboard.

mod arboard;
mod memory;

pub use arboard::ArboardClipboard;
pub use memory::MemoryClipboard;

use crate::application::ports::Clipboard;
use crate::domain::clipboard::ClipboardFormat;

/// Create the system clipboard adapter for the current platform
pub fn create_system_clipboard() -> Box<dyn Clipboard> {
    Box::new(ArboardClipboard::new())
}

/// Whether the system clipboard adapter can store `format`
pub fn system_clipboard_writes(format: ClipboardFormat) -> bool {
    ArboardClipboard::can_write(format)
}
