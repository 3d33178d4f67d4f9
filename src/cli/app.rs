//! Command runners for encode, decode and dump

use std::env;
use std::process::ExitCode;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::application::ports::{Clipboard, ConfigStore};
use crate::application::{try_copy, CopyError, UnmarshallError, UnmarshallReport};
use crate::domain::clipboard::{ClipboardFormat, SessionTime};
use crate::domain::config::AppConfig;
use crate::domain::wire::dump;
use crate::infrastructure::{create_system_clipboard, system_clipboard_writes, MemoryClipboard};

use super::args::{DecodeOptions, DumpOptions, EncodeOptions};
use super::buffer_io::{read_buffer, write_buffer};
use super::error::CliError;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment override for the buffer encoding
pub const ENV_ENCODING: &str = "CLIPWIRE_ENCODING";

fn session_time(explicit: Option<u32>) -> SessionTime {
    explicit.map(SessionTime::new).unwrap_or_else(SessionTime::now)
}

fn exit_with(presenter: &Presenter, result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn format_list(formats: &[ClipboardFormat]) -> String {
    formats
        .iter()
        .map(ClipboardFormat::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Narrow a staged snapshot to `keep`; an empty `keep` keeps everything
fn filter_formats(staging: &mut MemoryClipboard, keep: &[ClipboardFormat]) {
    if keep.is_empty() {
        return;
    }
    let dropped = staging.retain(|format| keep.contains(&format));
    if !dropped.is_empty() {
        debug!(dropped = %format_list(&dropped), "filtered formats out of snapshot");
    }
}

/// Copy the system clipboard into a staging clipboard and marshall it.
///
/// Blocking; run off the async runtime.
fn snapshot_system_clipboard(
    time: SessionTime,
    keep: &[ClipboardFormat],
) -> Result<(usize, Bytes), CliError> {
    let system = create_system_clipboard();
    let mut staging = MemoryClipboard::new();
    try_copy(&mut staging, &system, time)?;
    filter_formats(&mut staging, keep);
    Ok((staging.snapshot().len(), staging.marshall(time)))
}

/// Drop staged formats the system clipboard cannot store.
///
/// Fails before the system clipboard is cleared when nothing would be left
/// to write. Returns the dropped formats.
fn keep_system_writable(staging: &mut MemoryClipboard) -> Result<Vec<ClipboardFormat>, CliError> {
    let dropped = staging.retain(system_clipboard_writes);
    for format in &dropped {
        warn!(%format, "system clipboard cannot store format, not publishing it");
    }
    if staging.snapshot().is_empty() {
        return Err(CopyError::NoSupportedFormat.into());
    }
    Ok(dropped)
}

/// Unmarshall `buf` into a fresh staging clipboard.
///
/// Malformed buffers fail here, before any system clipboard is touched.
pub fn stage_buffer(
    buf: &Bytes,
    time: SessionTime,
) -> Result<(MemoryClipboard, UnmarshallReport), UnmarshallError> {
    let mut staging = MemoryClipboard::new();
    let report = staging.unmarshall(buf, time)?;
    Ok((staging, report))
}

/// Copy a staged clipboard onto the system clipboard. Blocking.
fn publish_to_system_clipboard(staging: &MemoryClipboard, time: SessionTime) -> Result<usize, CliError> {
    let mut system = create_system_clipboard();
    let formats = try_copy(&mut system, staging, time)?;
    debug!(formats, system_time = %system.time(), "published to system clipboard");
    Ok(formats)
}

/// Run `encode`
pub async fn run_encode(options: EncodeOptions, presenter: &Presenter) -> ExitCode {
    let result = async {
        let time = session_time(options.time);
        if !options.formats.is_empty() {
            presenter.info(&format!("Keeping formats: {}", format_list(&options.formats)));
        }
        let keep = options.formats.clone();
        let (formats, buf) =
            tokio::task::spawn_blocking(move || snapshot_system_clipboard(time, &keep)).await??;

        write_buffer(options.output.as_deref(), &buf, options.encoding).await?;
        presenter.success(&format!(
            "Encoded {} format(s) ({})",
            formats,
            presenter.format_size(buf.len())
        ));
        Ok::<(), CliError>(())
    }
    .await;

    exit_with(presenter, result)
}

/// Run `decode`
pub async fn run_decode(options: DecodeOptions, presenter: &Presenter) -> ExitCode {
    let result = async {
        let buf = read_buffer(
            options.input.as_deref(),
            options.encoding,
            options.max_buffer_size,
        )
        .await?;
        let time = session_time(options.time);

        let (mut staging, report) = stage_buffer(&buf, time)?;
        if let UnmarshallReport::Applied { skipped, .. } = report {
            if skipped > 0 {
                presenter.warn(&format!(
                    "Skipped {} format(s) not supported by this version",
                    skipped
                ));
            }
        }

        let dropped = keep_system_writable(&mut staging)?;
        if !dropped.is_empty() {
            presenter.warn(&format!(
                "System clipboard cannot store: {}",
                format_list(&dropped)
            ));
        }

        let formats =
            tokio::task::spawn_blocking(move || publish_to_system_clipboard(&staging, time))
                .await??;
        presenter.success(&format!("Copied {} format(s) to clipboard", formats));
        Ok::<(), CliError>(())
    }
    .await;

    exit_with(presenter, result)
}

/// Run `dump`
pub async fn run_dump(options: DumpOptions, presenter: &Presenter) -> ExitCode {
    let result = async {
        let buf = read_buffer(
            options.input.as_deref(),
            options.encoding,
            options.max_buffer_size,
        )
        .await?;
        let rendered = dump(&buf);
        if rendered.is_empty() {
            presenter.warn("Buffer too short to hold a format count");
        } else {
            presenter.output_inline(&rendered);
        }
        Ok::<(), CliError>(())
    }
    .await;

    exit_with(presenter, result)
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load_or_empty().await;

    let env_config = AppConfig {
        encoding: env::var(ENV_ENCODING).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
