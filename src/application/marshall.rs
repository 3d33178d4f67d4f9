//! Marshall a clipboard into a wire buffer

use bytes::Bytes;
use tracing::{debug, warn};

use crate::domain::clipboard::{SessionTime, ALL_FORMATS};
use crate::domain::wire::{encode, WireRecord};

use super::ports::Clipboard;
use super::session::ReadSession;

/// Snapshot every held format of `clipboard` into a marshalled buffer.
///
/// Formats are emitted in ascending id order and each payload is fetched
/// exactly once. If the clipboard cannot be opened the result is empty,
/// meaning "nothing to send"; a clipboard holding no formats yields the
/// 4-byte buffer `00 00 00 00`.
pub fn marshall<C: Clipboard + ?Sized>(clipboard: &C, time: SessionTime) -> Bytes {
    let Some(session) = ReadSession::open(clipboard, time) else {
        debug!(%time, "clipboard not available for marshalling");
        return Bytes::new();
    };

    let mut records = Vec::with_capacity(ALL_FORMATS.len());
    for format in ALL_FORMATS {
        if !session.has(format) {
            continue;
        }
        match WireRecord::new(format.id(), session.get(format)) {
            Ok(record) => records.push(record),
            Err(e) => warn!(%format, "skipping format: {}", e),
        }
    }
    drop(session);

    let buf = encode(&records);
    debug!(formats = records.len(), size = buf.len(), "marshalled clipboard");
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clipboard::ClipboardFormat;
    use crate::infrastructure::clipboard::MemoryClipboard;

    #[test]
    fn marshall_text_only() {
        let clipboard = MemoryClipboard::with_contents(
            SessionTime::new(1),
            [(ClipboardFormat::Text, Bytes::from_static(b"hi"))],
        );
        let buf = marshall(&clipboard, SessionTime::new(2));
        assert_eq!(
            &buf[..],
            &[0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x68, 0x69]
        );
        assert!(!clipboard.is_open());
    }

    #[test]
    fn marshall_empty_clipboard() {
        let clipboard = MemoryClipboard::new();
        let buf = marshall(&clipboard, SessionTime::ZERO);
        assert_eq!(&buf[..], &[0, 0, 0, 0]);
    }

    #[test]
    fn marshall_orders_formats_ascending() {
        let clipboard = MemoryClipboard::with_contents(
            SessionTime::new(1),
            [
                (ClipboardFormat::Bitmap, Bytes::from_static(b"B")),
                (ClipboardFormat::Text, Bytes::from_static(b"T")),
            ],
        );
        let buf = marshall(&clipboard, SessionTime::new(1));
        assert_eq!(
            &buf[..],
            &[0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, b'T', 0, 0, 0, 2, 0, 0, 0, 1, b'B']
        );
    }

    #[test]
    fn marshall_busy_clipboard_is_empty() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.open(SessionTime::new(1)));
        assert!(marshall(&clipboard, SessionTime::new(2)).is_empty());
        // The caller's session is left alone
        assert!(clipboard.is_open());
        clipboard.close();
    }
}
