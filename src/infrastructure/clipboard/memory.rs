//! In-memory clipboard
//!
//! Holds one payload slot per known format. Used as the staging clipboard on
//! either end of a transfer: the local system clipboard is copied into it
//! before marshalling, and buffers from a peer are unmarshalled into it
//! before being copied onto the system clipboard.

use std::cell::Cell;

use bytes::Bytes;

use crate::application::ports::Clipboard;
use crate::application::{marshall, unmarshall, UnmarshallError, UnmarshallReport};
use crate::domain::clipboard::{ClipboardFormat, SessionTime, ALL_FORMATS, NUM_FORMATS};

#[derive(Debug, Default)]
pub struct MemoryClipboard {
    slots: [Option<Bytes>; NUM_FORMATS as usize],
    open: Cell<bool>,
    session_time: Cell<SessionTime>,
    owned_time: SessionTime,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard already holding `contents`, owned since `time`
    pub fn with_contents<I>(time: SessionTime, contents: I) -> Self
    where
        I: IntoIterator<Item = (ClipboardFormat, Bytes)>,
    {
        let mut clipboard = Self {
            owned_time: time,
            ..Self::default()
        };
        for (format, data) in contents {
            clipboard.slots[format.index()] = Some(data);
        }
        clipboard
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Held formats in ascending order, read without opening
    pub fn snapshot(&self) -> Vec<(ClipboardFormat, Bytes)> {
        ALL_FORMATS
            .into_iter()
            .filter_map(|format| {
                self.slots[format.index()]
                    .clone()
                    .map(|data| (format, data))
            })
            .collect()
    }

    /// Drop every held format `keep` rejects, returning the dropped formats
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<ClipboardFormat>
    where
        F: FnMut(ClipboardFormat) -> bool,
    {
        let mut dropped = Vec::new();
        for format in ALL_FORMATS {
            if self.slots[format.index()].is_some() && !keep(format) {
                self.slots[format.index()] = None;
                dropped.push(format);
            }
        }
        dropped
    }

    /// Marshall this clipboard's contents
    pub fn marshall(&self, time: SessionTime) -> Bytes {
        marshall(self, time)
    }

    /// Replace this clipboard's contents from a marshalled buffer
    pub fn unmarshall(
        &mut self,
        buf: &Bytes,
        time: SessionTime,
    ) -> Result<UnmarshallReport, UnmarshallError> {
        unmarshall(self, buf, time)
    }
}

impl Clipboard for MemoryClipboard {
    fn open(&self, time: SessionTime) -> bool {
        if self.open.replace(true) {
            return false;
        }
        self.session_time.set(time);
        true
    }

    fn close(&self) {
        self.open.set(false);
    }

    fn empty(&mut self) -> bool {
        self.slots = Default::default();
        self.owned_time = self.session_time.get();
        true
    }

    fn has(&self, format: ClipboardFormat) -> bool {
        self.slots[format.index()].is_some()
    }

    fn get(&self, format: ClipboardFormat) -> Bytes {
        self.slots[format.index()].clone().unwrap_or_default()
    }

    fn add(&mut self, format: ClipboardFormat, data: Bytes) {
        self.slots[format.index()] = Some(data);
    }

    fn time(&self) -> SessionTime {
        self.owned_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clipboard_is_empty_and_closed() {
        let clipboard = MemoryClipboard::new();
        assert!(!clipboard.is_open());
        assert!(clipboard.snapshot().is_empty());
        assert_eq!(clipboard.time(), SessionTime::ZERO);
    }

    #[test]
    fn open_rejects_nesting() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.open(SessionTime::new(1)));
        assert!(!clipboard.open(SessionTime::new(2)));
        clipboard.close();
        assert!(clipboard.open(SessionTime::new(3)));
        clipboard.close();
    }

    #[test]
    fn empty_takes_session_time() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.open(SessionTime::new(7)));
        assert!(clipboard.empty());
        clipboard.close();
        assert_eq!(clipboard.time(), SessionTime::new(7));
    }

    #[test]
    fn add_replaces_payload() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.add(ClipboardFormat::Text, Bytes::from_static(b"one"));
        clipboard.add(ClipboardFormat::Text, Bytes::from_static(b"two"));
        assert!(clipboard.has(ClipboardFormat::Text));
        assert!(!clipboard.has(ClipboardFormat::Html));
        assert_eq!(clipboard.get(ClipboardFormat::Text), Bytes::from_static(b"two"));
        assert!(clipboard.get(ClipboardFormat::Html).is_empty());
    }

    #[test]
    fn retain_reports_dropped_formats() {
        let mut clipboard = MemoryClipboard::with_contents(
            SessionTime::new(4),
            [
                (ClipboardFormat::Text, Bytes::from_static(b"t")),
                (ClipboardFormat::Bitmap, Bytes::from_static(b"b")),
            ],
        );

        let dropped = clipboard.retain(|format| format != ClipboardFormat::Bitmap);

        assert_eq!(dropped, vec![ClipboardFormat::Bitmap]);
        assert_eq!(
            clipboard.snapshot(),
            vec![(ClipboardFormat::Text, Bytes::from_static(b"t"))]
        );
        assert_eq!(clipboard.time(), SessionTime::new(4));
    }

    #[test]
    fn marshall_round_trip() {
        let source = MemoryClipboard::with_contents(
            SessionTime::new(1),
            [
                (ClipboardFormat::Text, Bytes::from_static(b"line\n")),
                (ClipboardFormat::Bitmap, Bytes::from(vec![0u8; 1024])),
            ],
        );
        let mut target = MemoryClipboard::new();

        let buf = source.marshall(SessionTime::new(2));
        let report = target.unmarshall(&buf, SessionTime::new(3)).unwrap();

        assert_eq!(report, UnmarshallReport::Applied { stored: 2, skipped: 0 });
        assert_eq!(target.snapshot(), source.snapshot());
    }
}
