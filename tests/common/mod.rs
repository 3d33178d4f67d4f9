//! Shared test doubles

use std::cell::Cell;

use bytes::Bytes;
use clipwire::application::ports::Clipboard;
use clipwire::domain::clipboard::{ClipboardFormat, SessionTime};
use clipwire::infrastructure::MemoryClipboard;

/// Clipboard that can be told to refuse `open` or `empty`, and counts calls
#[derive(Default)]
pub struct ScriptedClipboard {
    pub inner: MemoryClipboard,
    pub refuse_open: bool,
    pub refuse_empty: bool,
    pub opens: Cell<usize>,
    pub closes: Cell<usize>,
    pub gets: Cell<usize>,
}

impl ScriptedClipboard {
    pub fn holding(contents: &[(ClipboardFormat, &'static str)]) -> Self {
        Self {
            inner: MemoryClipboard::with_contents(
                SessionTime::new(1),
                contents
                    .iter()
                    .map(|&(format, data)| (format, Bytes::from_static(data.as_bytes()))),
            ),
            ..Self::default()
        }
    }

    pub fn refusing_open() -> Self {
        Self {
            refuse_open: true,
            ..Self::default()
        }
    }

    pub fn refusing_empty() -> Self {
        Self {
            refuse_empty: true,
            ..Self::default()
        }
    }
}

impl Clipboard for ScriptedClipboard {
    fn open(&self, time: SessionTime) -> bool {
        if self.refuse_open {
            return false;
        }
        self.opens.set(self.opens.get() + 1);
        self.inner.open(time)
    }

    fn close(&self) {
        self.closes.set(self.closes.get() + 1);
        self.inner.close()
    }

    fn empty(&mut self) -> bool {
        if self.refuse_empty {
            return false;
        }
        self.inner.empty()
    }

    fn has(&self, format: ClipboardFormat) -> bool {
        self.inner.has(format)
    }

    fn get(&self, format: ClipboardFormat) -> Bytes {
        self.gets.set(self.gets.get() + 1);
        self.inner.get(format)
    }

    fn add(&mut self, format: ClipboardFormat, data: Bytes) {
        self.inner.add(format, data)
    }

    fn time(&self) -> SessionTime {
        self.inner.time()
    }
}
