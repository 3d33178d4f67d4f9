//! Application layer - Clipboard transfer operations and port interfaces
//!
//! Contains the marshall / unmarshall / copy operations and the trait
//! definitions every clipboard implementation satisfies.

pub mod copy;
pub mod marshall;
pub mod ports;
pub mod session;
pub mod unmarshall;

// Re-export operations
pub use copy::{copy, copy_at_source_time, try_copy, CopyError};
pub use marshall::marshall;
pub use session::{ReadSession, WriteSession};
pub use unmarshall::{unmarshall, UnmarshallError, UnmarshallReport};
