//! Unmarshall a wire buffer into a clipboard

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::domain::clipboard::SessionTime;
use crate::domain::error::WireError;
use crate::domain::wire::decode;

use super::ports::Clipboard;
use super::session::WriteSession;

/// Errors from unmarshalling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnmarshallError {
    #[error("Malformed clipboard buffer: {0}")]
    Wire(#[from] WireError),

    #[error("Destination clipboard could not be cleared")]
    EmptyFailed,
}

/// What unmarshalling did to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmarshallReport {
    /// The destination was replaced with the buffer's known formats
    Applied {
        /// Formats stored
        stored: usize,
        /// Records with ids this build does not know
        skipped: usize,
    },
    /// The destination refused to open; nothing was changed
    NotOpened,
}

/// Replace the contents of `clipboard` with the formats in `buf`.
///
/// The whole buffer is validated before the clipboard is opened, so a
/// truncated or malformed buffer leaves the destination untouched. Records
/// with unknown format ids are skipped. A destination that cannot be opened
/// is not an error and yields [`UnmarshallReport::NotOpened`].
pub fn unmarshall<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    buf: &Bytes,
    time: SessionTime,
) -> Result<UnmarshallReport, UnmarshallError> {
    let decoded = decode(buf.clone())?;

    let Some(mut session) = WriteSession::open(clipboard, time) else {
        debug!(%time, "destination clipboard not available for unmarshalling");
        return Ok(UnmarshallReport::NotOpened);
    };

    if !session.empty() {
        return Err(UnmarshallError::EmptyFailed);
    }

    let mut stored = 0;
    let mut skipped = 0;
    for record in decoded.records {
        match record.format() {
            Some(format) => {
                session.add(format, record.into_payload());
                stored += 1;
            }
            None => {
                debug!(id = record.id(), "skipping unknown format");
                skipped += 1;
            }
        }
    }

    Ok(UnmarshallReport::Applied { stored, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clipboard::{ClipboardFormat, ALL_FORMATS};
    use crate::infrastructure::clipboard::MemoryClipboard;

    #[test]
    fn unmarshall_text_only() {
        let buf = Bytes::from_static(&[0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, b'h', b'i']);
        let mut clipboard = MemoryClipboard::new();

        let report = unmarshall(&mut clipboard, &buf, SessionTime::new(3)).unwrap();

        assert_eq!(report, UnmarshallReport::Applied { stored: 1, skipped: 0 });
        assert!(!clipboard.is_open());
        assert_eq!(clipboard.time(), SessionTime::new(3));
        assert!(clipboard.open(SessionTime::new(4)));
        for format in ALL_FORMATS {
            assert_eq!(clipboard.has(format), format == ClipboardFormat::Text);
        }
        assert_eq!(clipboard.get(ClipboardFormat::Text), Bytes::from_static(b"hi"));
        clipboard.close();
    }

    #[test]
    fn unmarshall_replaces_previous_contents() {
        let mut clipboard = MemoryClipboard::with_contents(
            SessionTime::new(1),
            [(ClipboardFormat::Html, Bytes::from_static(b"<p>old</p>"))],
        );
        let buf = Bytes::from_static(&[0, 0, 0, 0]);

        let report = unmarshall(&mut clipboard, &buf, SessionTime::new(2)).unwrap();

        assert_eq!(report, UnmarshallReport::Applied { stored: 0, skipped: 0 });
        assert!(clipboard.snapshot().is_empty());
    }

    #[test]
    fn unmarshall_truncated_leaves_destination_untouched() {
        let mut clipboard = MemoryClipboard::with_contents(
            SessionTime::new(1),
            [(ClipboardFormat::Text, Bytes::from_static(b"keep"))],
        );
        let buf = Bytes::from_static(&[0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 9, b'h']);

        let err = unmarshall(&mut clipboard, &buf, SessionTime::new(2)).unwrap_err();

        assert!(matches!(err, UnmarshallError::Wire(WireError::Truncated { .. })));
        assert!(!clipboard.is_open());
        assert_eq!(clipboard.time(), SessionTime::new(1));
        assert_eq!(
            clipboard.snapshot(),
            vec![(ClipboardFormat::Text, Bytes::from_static(b"keep"))]
        );
    }

    #[test]
    fn unmarshall_busy_destination_is_noop() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.open(SessionTime::new(1)));
        let buf = Bytes::from_static(&[0, 0, 0, 0]);

        let report = unmarshall(&mut clipboard, &buf, SessionTime::new(2)).unwrap();

        assert_eq!(report, UnmarshallReport::NotOpened);
        assert!(clipboard.is_open());
        clipboard.close();
    }
}
