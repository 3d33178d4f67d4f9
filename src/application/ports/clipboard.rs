//! Clipboard port interface

use bytes::Bytes;
use thiserror::Error;

use crate::domain::clipboard::{ClipboardFormat, SessionTime};

/// Failures inside clipboard adapters.
///
/// The port itself reports failure through `bool` returns; adapters use this
/// type for their own plumbing and logging.
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Port for a clipboard instance.
///
/// Access is bracketed by `open` and `close`. Callers must pair every
/// successful `open` with exactly one `close`; the session guards in
/// [`crate::application::session`] do this for you. Opening is not
/// reentrant: a second `open` before `close` may fail.
pub trait Clipboard {
    /// Acquire exclusive access.
    ///
    /// `time` is the session time; it becomes the clipboard's time if the
    /// session goes on to call [`Clipboard::empty`]. Returns false if the
    /// clipboard is busy or unavailable.
    fn open(&self, time: SessionTime) -> bool;

    /// Release access. Must not fail observably.
    fn close(&self);

    /// Drop every held format and take ownership of the contents.
    ///
    /// Returns false if clearing failed; callers must not populate after
    /// a false return.
    fn empty(&mut self) -> bool;

    /// Whether `format` is held
    fn has(&self, format: ClipboardFormat) -> bool;

    /// Payload for `format`.
    ///
    /// Only meaningful when [`Clipboard::has`] returns true. May be expensive,
    /// so callers fetch each format once.
    fn get(&self, format: ClipboardFormat) -> Bytes;

    /// Store or replace the payload for `format`
    fn add(&mut self, format: ClipboardFormat, data: Bytes);

    /// Time the current contents were established; valid whether open or not
    fn time(&self) -> SessionTime;
}

/// Blanket implementation for boxed clipboard types
impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn open(&self, time: SessionTime) -> bool {
        self.as_ref().open(time)
    }

    fn close(&self) {
        self.as_ref().close()
    }

    fn empty(&mut self) -> bool {
        self.as_mut().empty()
    }

    fn has(&self, format: ClipboardFormat) -> bool {
        self.as_ref().has(format)
    }

    fn get(&self, format: ClipboardFormat) -> Bytes {
        self.as_ref().get(format)
    }

    fn add(&mut self, format: ClipboardFormat, data: Bytes) {
        self.as_mut().add(format, data)
    }

    fn time(&self) -> SessionTime {
        self.as_ref().time()
    }
}
