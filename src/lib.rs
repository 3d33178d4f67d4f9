//! Clipwire - clipboard capability contract and wire codec
//!
//! This crate defines the operations every clipboard implementation offers
//! and the compact binary buffer used to move clipboard contents between two
//! independently owned clipboards, for example across a network link.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Formats, session time, the wire codec, and errors
//! - **Application**: The `Clipboard` port plus marshall, unmarshall and copy
//! - **Infrastructure**: In-memory and system clipboard adapters, config store
//! - **CLI**: Command-line interface, buffer files, and logging setup
//!
//! # Wire format
//!
//! ```text
//! [u32 format_count]
//! format_count x [u32 format_id][u32 payload_len][payload bytes]
//! ```
//!
//! Integers are big-endian. Ids this build does not know are skipped on
//! decode so older and newer peers interoperate.

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
