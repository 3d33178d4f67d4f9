//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: clipboards
//! (in-memory and system) and the configuration file store.

pub mod clipboard;
pub mod config;

// Re-export adapters
pub use clipboard::{
    create_system_clipboard, system_clipboard_writes, ArboardClipboard, MemoryClipboard,
};
pub use config::XdgConfigStore;
