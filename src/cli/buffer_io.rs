//! Reading and writing marshalled buffers from files and pipes

use std::path::Path;

use base64::Engine;
use bytes::Bytes;
use tokio::fs;
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

use crate::domain::config::BufferEncoding;

use super::error::CliError;

fn is_stdio(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p.as_os_str() == "-")
}

/// Read a buffer, rejecting inputs larger than `max_size` bytes
pub async fn read_buffer(
    input: Option<&Path>,
    encoding: BufferEncoding,
    max_size: u64,
) -> Result<Bytes, CliError> {
    let mut raw = Vec::new();
    match input {
        Some(path) if !is_stdio(Some(path)) => {
            let size = fs::metadata(path).await?.len();
            if size > max_size {
                return Err(CliError::BufferTooLarge { size, max: max_size });
            }
            fs::File::open(path)
                .await?
                .take(max_size.saturating_add(1))
                .read_to_end(&mut raw)
                .await?;
        }
        _ => {
            io::stdin().take(max_size.saturating_add(1)).read_to_end(&mut raw).await?;
        }
    }

    if raw.len() as u64 > max_size {
        return Err(CliError::BufferTooLarge {
            size: raw.len() as u64,
            max: max_size,
        });
    }

    decode_transport(raw, encoding)
}

/// Write a buffer to `output`, or stdout when absent
pub async fn write_buffer(
    output: Option<&Path>,
    buf: &Bytes,
    encoding: BufferEncoding,
) -> Result<(), CliError> {
    let encoded = encode_transport(buf, encoding);
    if is_stdio(output) {
        let mut stdout = io::stdout();
        stdout.write_all(&encoded).await?;
        stdout.flush().await?;
    } else if let Some(path) = output {
        fs::write(path, &encoded).await?;
    }
    Ok(())
}

fn decode_transport(raw: Vec<u8>, encoding: BufferEncoding) -> Result<Bytes, CliError> {
    match encoding {
        BufferEncoding::Raw => Ok(Bytes::from(raw)),
        BufferEncoding::Base64 => {
            let text: Vec<u8> = raw.into_iter().filter(|b| !b.is_ascii_whitespace()).collect();
            let decoded = base64::engine::general_purpose::STANDARD.decode(text)?;
            Ok(Bytes::from(decoded))
        }
    }
}

fn encode_transport(buf: &Bytes, encoding: BufferEncoding) -> Bytes {
    match encoding {
        BufferEncoding::Raw => buf.clone(),
        BufferEncoding::Base64 => {
            let mut text = base64::engine::general_purpose::STANDARD.encode(buf);
            text.push('\n');
            Bytes::from(text)
        }
    }
}
