//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, buffer file handling,
//! logging setup, and the command runners.

pub mod app;
pub mod args;
pub mod buffer_io;
pub mod config_cmd;
pub mod error;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{
    load_merged_config, run_decode, run_dump, run_encode, EXIT_ERROR, EXIT_SUCCESS,
    EXIT_USAGE_ERROR,
};
pub use args::{Cli, Commands, ConfigAction, DecodeOptions, DumpOptions, EncodeOptions};
pub use error::CliError;
pub use presenter::Presenter;
