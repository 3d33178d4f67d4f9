//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::clipboard::ClipboardFormat;
use crate::domain::config::BufferEncoding;

/// Clipwire - move clipboard contents through a portable binary buffer
#[derive(Parser, Debug)]
#[command(name = "clipwire")]
#[command(version)]
#[command(about = "Marshal clipboard contents to and from a portable binary buffer")]
#[command(long_about = None)]
pub struct Cli {
    /// Buffer encoding for files and pipes
    #[arg(short = 'e', long, value_name = "ENCODING", global = true)]
    pub encoding: Option<EncodingArg>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Marshal the system clipboard into a buffer
    Encode {
        /// Write the buffer here instead of stdout
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Session time (defaults to the current Unix time)
        #[arg(short = 't', long, value_name = "TIME")]
        time: Option<u32>,

        /// Only keep these formats: text, html, bitmap (comma separated)
        #[arg(short = 'f', long = "format", value_name = "FORMAT", value_delimiter = ',')]
        formats: Vec<ClipboardFormat>,
    },
    /// Unmarshal a buffer onto the system clipboard
    Decode {
        /// Buffer file, or - for stdin
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Session time (defaults to the current Unix time)
        #[arg(short = 't', long, value_name = "TIME")]
        time: Option<u32>,
    },
    /// Print a human-readable rendering of a buffer
    Dump {
        /// Buffer file, or - for stdin
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Encoding argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EncodingArg {
    Raw,
    Base64,
}

impl From<EncodingArg> for BufferEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Raw => BufferEncoding::Raw,
            EncodingArg::Base64 => BufferEncoding::Base64,
        }
    }
}

/// Parsed encode options
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    pub output: Option<PathBuf>,
    pub encoding: BufferEncoding,
    pub time: Option<u32>,
    /// Empty keeps every format
    pub formats: Vec<ClipboardFormat>,
}

/// Parsed decode options
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub input: Option<PathBuf>,
    pub encoding: BufferEncoding,
    pub time: Option<u32>,
    pub max_buffer_size: u64,
}

/// Parsed dump options
#[derive(Debug, Clone)]
pub struct DumpOptions {
    pub input: Option<PathBuf>,
    pub encoding: BufferEncoding,
    pub max_buffer_size: u64,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["encoding", "max_buffer_size", "log_level"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
