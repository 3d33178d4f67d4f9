//! Copy contents between two clipboards

use thiserror::Error;
use tracing::info;

use crate::domain::clipboard::{SessionTime, ALL_FORMATS};

use super::ports::Clipboard;
use super::session::{ReadSession, WriteSession};

/// Reasons a copy transferred nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("Source clipboard could not be opened")]
    SourceUnavailable,

    #[error("Destination clipboard could not be opened")]
    DestinationUnavailable,

    #[error("Destination clipboard could not be cleared")]
    EmptyFailed,

    #[error("Source clipboard does not hold a supported format")]
    NoSupportedFormat,
}

/// Replace `dst`'s contents with every format `src` holds.
///
/// `src` is opened first, then `dst`, both with `time`. Each clipboard that
/// opened is closed exactly once, `dst` before `src`. Returns the number of
/// formats transferred; transferring none is an error.
pub fn try_copy<D, S>(dst: &mut D, src: &S, time: SessionTime) -> Result<usize, CopyError>
where
    D: Clipboard + ?Sized,
    S: Clipboard + ?Sized,
{
    let src = ReadSession::open(src, time).ok_or(CopyError::SourceUnavailable)?;
    let mut dst = WriteSession::open(dst, time).ok_or(CopyError::DestinationUnavailable)?;

    if !dst.empty() {
        return Err(CopyError::EmptyFailed);
    }

    let mut copied = 0;
    for format in ALL_FORMATS {
        if src.has(format) {
            dst.add(format, src.get(format));
            copied += 1;
        }
    }

    if copied == 0 {
        return Err(CopyError::NoSupportedFormat);
    }
    Ok(copied)
}

/// [`try_copy`] reduced to "did at least one format transfer"
pub fn copy<D, S>(dst: &mut D, src: &S, time: SessionTime) -> bool
where
    D: Clipboard + ?Sized,
    S: Clipboard + ?Sized,
{
    match try_copy(dst, src, time) {
        Ok(_) => true,
        Err(e) => {
            info!("clipboard copy failed: {}", e);
            false
        }
    }
}

/// [`copy`] using the source clipboard's own time
pub fn copy_at_source_time<D, S>(dst: &mut D, src: &S) -> bool
where
    D: Clipboard + ?Sized,
    S: Clipboard + ?Sized,
{
    copy(dst, src, src.time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clipboard::ClipboardFormat;
    use crate::infrastructure::clipboard::MemoryClipboard;
    use bytes::Bytes;

    #[test]
    fn copy_transfers_all_formats() {
        let src = MemoryClipboard::with_contents(
            SessionTime::new(9),
            [
                (ClipboardFormat::Text, Bytes::from_static(b"hello")),
                (ClipboardFormat::Html, Bytes::from_static(b"<b>hello</b>")),
            ],
        );
        let mut dst = MemoryClipboard::with_contents(
            SessionTime::new(1),
            [(ClipboardFormat::Bitmap, Bytes::from_static(b"old"))],
        );

        assert_eq!(try_copy(&mut dst, &src, SessionTime::new(10)), Ok(2));
        assert_eq!(dst.snapshot(), src.snapshot());
        assert_eq!(dst.time(), SessionTime::new(10));
        assert!(!dst.is_open());
        assert!(!src.is_open());
    }

    #[test]
    fn copy_from_empty_source_fails() {
        let src = MemoryClipboard::new();
        let mut dst = MemoryClipboard::new();
        assert_eq!(
            try_copy(&mut dst, &src, SessionTime::new(1)),
            Err(CopyError::NoSupportedFormat)
        );
        assert!(!copy(&mut dst, &src, SessionTime::new(1)));
    }

    #[test]
    fn copy_at_source_time_uses_source_time() {
        let src = MemoryClipboard::with_contents(
            SessionTime::new(42),
            [(ClipboardFormat::Text, Bytes::from_static(b"t"))],
        );
        let mut dst = MemoryClipboard::new();
        assert!(copy_at_source_time(&mut dst, &src));
        assert_eq!(dst.time(), SessionTime::new(42));
    }
}
