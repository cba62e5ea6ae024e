// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Size, TerminalError, TerminalSession};
use std::sync::{Mutex, PoisonError,
                atomic::{AtomicBool, AtomicUsize, Ordering}};

/// A [`TerminalSession`] that records calls instead of touching a tty.
///
/// Mirrors the contract of [`RawModeController`]: acquire is a no-op when already raw,
/// release is a no-op when not raw, and only releases that actually leave raw mode are
/// counted.
///
/// [`RawModeController`]: crate::RawModeController
#[derive(Debug, Default)]
pub struct TerminalSessionMock {
    is_raw: AtomicBool,
    unavailable: bool,
    acquire_count: AtomicUsize,
    release_count: AtomicUsize,
    dimensions: Mutex<Size>,
}

impl TerminalSessionMock {
    /// A session whose [`TerminalSession::acquire()`] always fails, as it would when
    /// the process is not attached to a terminal.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    /// Change what the next [`TerminalSession::query_dimensions()`] reports, like a
    /// user resizing the window.
    pub fn set_dimensions(&self, size: Size) {
        *self.dimensions.lock().unwrap_or_else(PoisonError::into_inner) = size;
    }

    #[must_use]
    pub fn acquire_count(&self) -> usize { self.acquire_count.load(Ordering::SeqCst) }

    #[must_use]
    pub fn release_count(&self) -> usize { self.release_count.load(Ordering::SeqCst) }
}

impl TerminalSession for TerminalSessionMock {
    fn acquire(&self) -> Result<(), TerminalError> {
        if self.unavailable {
            return Err(TerminalError::unavailable("mock terminal is unavailable"));
        }
        if !self.is_raw.swap(true, Ordering::SeqCst) {
            self.acquire_count.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    fn release(&self) {
        if self.is_raw.swap(false, Ordering::SeqCst) {
            self.release_count.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn is_raw(&self) -> bool { self.is_raw.load(Ordering::SeqCst) }

    fn query_dimensions(&self) -> Size {
        *self.dimensions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mock_counts_only_real_transitions() {
        let session = TerminalSessionMock::default();
        session.release();
        session.acquire().unwrap();
        session.acquire().unwrap();
        session.release();
        session.release();

        assert_eq!(session.acquire_count(), 1);
        assert_eq!(session.release_count(), 1);
        assert!(!session.is_raw());
    }

    #[test]
    fn test_mock_dimensions_can_change() {
        let session = TerminalSessionMock::default();
        assert_eq!(session.query_dimensions(), Size::DEFAULT);

        let bigger = Size::clamped(120, 40);
        session.set_dimensions(bigger);
        assert_eq!(session.query_dimensions(), bigger);
    }
}
