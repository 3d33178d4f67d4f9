//! Domain layer - Core types and the wire format
//!
//! Contains value objects, the marshalled buffer codec, and domain errors.
//! This layer has no dependencies on external systems.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod wire;

// Re-export common types
pub use clipboard::{ClipboardFormat, SessionTime, ALL_FORMATS, NUM_FORMATS};
pub use config::{AppConfig, BufferEncoding};
pub use error::*;
pub use wire::{decode, dump, encode, WireRecord};
