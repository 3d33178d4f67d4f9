//! Scoped clipboard sessions
//!
//! A session is created only when `open` succeeds and calls `close` exactly
//! once when dropped, so every exit path releases the clipboard.

use std::ops::{Deref, DerefMut};

use crate::domain::clipboard::SessionTime;

use super::ports::Clipboard;

/// Read-only access to an open clipboard
pub struct ReadSession<'a, C: Clipboard + ?Sized> {
    clipboard: &'a C,
}

impl<'a, C: Clipboard + ?Sized> ReadSession<'a, C> {
    /// Open `clipboard`, or `None` if it refuses
    pub fn open(clipboard: &'a C, time: SessionTime) -> Option<Self> {
        // Built only after a successful open; dropping it closes
        if clipboard.open(time) {
            Some(Self { clipboard })
        } else {
            None
        }
    }
}

impl<C: Clipboard + ?Sized> Deref for ReadSession<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.clipboard
    }
}

impl<C: Clipboard + ?Sized> Drop for ReadSession<'_, C> {
    fn drop(&mut self) {
        self.clipboard.close();
    }
}

/// Mutable access to an open clipboard
pub struct WriteSession<'a, C: Clipboard + ?Sized> {
    clipboard: &'a mut C,
}

impl<'a, C: Clipboard + ?Sized> WriteSession<'a, C> {
    /// Open `clipboard`, or `None` if it refuses
    pub fn open(clipboard: &'a mut C, time: SessionTime) -> Option<Self> {
        if clipboard.open(time) {
            Some(Self { clipboard })
        } else {
            None
        }
    }
}

impl<C: Clipboard + ?Sized> Deref for WriteSession<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.clipboard
    }
}

impl<C: Clipboard + ?Sized> DerefMut for WriteSession<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.clipboard
    }
}

impl<C: Clipboard + ?Sized> Drop for WriteSession<'_, C> {
    fn drop(&mut self) {
        self.clipboard.close();
    }
}
