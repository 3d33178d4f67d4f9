//! Cross-platform system clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). Reads expose the
//! system text; writes are staged after `empty()` and flushed on `close()`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use bytes::Bytes;
use tracing::{debug, warn};

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::clipboard::{ClipboardFormat, SessionTime};

#[derive(Default)]
struct State {
    handle: Option<arboard::Clipboard>,
    session_time: SessionTime,
    owned_time: SessionTime,
    /// Formats added since the last `empty()`; `None` reads through to the system
    staged: Option<BTreeMap<ClipboardFormat, Bytes>>,
}

/// System clipboard adapter using arboard
pub struct ArboardClipboard {
    state: Mutex<State>,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&mut self) -> &mut State {
        self.state.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_text(handle: &mut arboard::Clipboard) -> Result<String, ClipboardError> {
        handle
            .get_text()
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))
    }

    /// Whether the system clipboard can store `format`
    pub fn can_write(format: ClipboardFormat) -> bool {
        matches!(format, ClipboardFormat::Text | ClipboardFormat::Html)
    }

    /// Staged payloads arboard can write, as `(html, text)`
    fn writable(staged: &BTreeMap<ClipboardFormat, Bytes>) -> (Option<String>, Option<String>) {
        let as_string = |format: ClipboardFormat| {
            staged
                .get(&format)
                .map(|data: &Bytes| String::from_utf8_lossy(data).into_owned())
        };
        (as_string(ClipboardFormat::Html), as_string(ClipboardFormat::Text))
    }

    fn flush(
        handle: &mut arboard::Clipboard,
        staged: &BTreeMap<ClipboardFormat, Bytes>,
    ) -> Result<(), ClipboardError> {
        for format in staged.keys().filter(|f| !Self::can_write(**f)) {
            warn!(%format, "system clipboard cannot store format, dropping it");
        }

        let result = match Self::writable(staged) {
            (Some(html), text) => handle.set_html(html, text),
            (None, Some(text)) => handle.set_text(text),
            (None, None) => return Ok(()),
        };
        result.map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for ArboardClipboard {
    fn open(&self, time: SessionTime) -> bool {
        let mut state = self.lock();
        if state.handle.is_some() {
            return false;
        }
        match arboard::Clipboard::new() {
            Ok(handle) => {
                state.handle = Some(handle);
                state.session_time = time;
                state.staged = None;
                true
            }
            Err(e) => {
                warn!("{}", ClipboardError::Unavailable(e.to_string()));
                false
            }
        }
    }

    fn close(&self) {
        let mut state = self.lock();
        let Some(mut handle) = state.handle.take() else {
            return;
        };
        if let Some(staged) = state.staged.take() {
            if let Err(e) = Self::flush(&mut handle, &staged) {
                warn!("{}", e);
            }
        }
    }

    fn empty(&mut self) -> bool {
        let state = self.state_mut();
        let Some(handle) = state.handle.as_mut() else {
            return false;
        };
        if let Err(e) = handle.clear() {
            warn!("{}", ClipboardError::WriteFailed(e.to_string()));
            return false;
        }
        state.staged = Some(BTreeMap::new());
        state.owned_time = state.session_time;
        true
    }

    fn has(&self, format: ClipboardFormat) -> bool {
        let mut state = self.lock();
        if let Some(staged) = state.staged.as_ref() {
            return staged.contains_key(&format);
        }
        match (format, state.handle.as_mut()) {
            (ClipboardFormat::Text, Some(handle)) => Self::read_text(handle).is_ok(),
            _ => false,
        }
    }

    fn get(&self, format: ClipboardFormat) -> Bytes {
        let mut state = self.lock();
        if let Some(staged) = state.staged.as_ref() {
            return staged.get(&format).cloned().unwrap_or_default();
        }
        match (format, state.handle.as_mut()) {
            (ClipboardFormat::Text, Some(handle)) => match Self::read_text(handle) {
                Ok(text) => Bytes::from(text),
                Err(e) => {
                    debug!("{}", e);
                    Bytes::new()
                }
            },
            _ => Bytes::new(),
        }
    }

    fn add(&mut self, format: ClipboardFormat, data: Bytes) {
        self.state_mut()
            .staged
            .get_or_insert_with(BTreeMap::new)
            .insert(format, data);
    }

    fn time(&self) -> SessionTime {
        self.lock().owned_time
    }
}
