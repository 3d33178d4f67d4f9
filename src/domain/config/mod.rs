//! Configuration domain module

mod app_config;
mod encoding;

pub use app_config::{AppConfig, DEFAULT_LOG_LEVEL, DEFAULT_MAX_BUFFER_SIZE};
pub use encoding::BufferEncoding;
