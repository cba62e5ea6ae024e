// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platform-agnostic seam for terminal ownership, and the RAII guard around it.

use crate::{Size, TerminalError};

/// Exclusive ownership of the controlling terminal.
///
/// Lifecycle: created in cooked mode, moved to raw exactly once by [`Self::acquire()`],
/// moved back exactly once by [`Self::release()`]. Implementations must be `Send +
/// Sync` because the interrupt path calls [`Self::release()`] from the signal routing
/// thread while the main loop may be mid-[`flush()`].
///
/// [`RawModeController`] is the production implementation. See
/// [`TerminalSessionMock`] for the test double.
///
/// [`RawModeController`]: crate::RawModeController
/// [`TerminalSessionMock`]: crate::TerminalSessionMock
/// [`flush()`]: crate::FrameCompositor::flush
pub trait TerminalSession: Send + Sync {
    /// Switch to raw mode, the alternate screen, and a hidden cursor.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::TerminalUnavailable`] if the termios query or apply
    /// fails. In that case the original mode is left untouched.
    fn acquire(&self) -> Result<(), TerminalError>;

    /// Restore the cursor, the main screen, and the original termios settings.
    ///
    /// No-op when not raw. Idempotent, never fails outwardly, and safe to call
    /// concurrently from the main thread and the signal routing thread.
    fn release(&self);

    fn is_raw(&self) -> bool;

    /// Current dimensions, floor-clamped (see [`Size::clamped()`]). Never fails.
    fn query_dimensions(&self) -> Size;
}

/// RAII guard that releases the [`TerminalSession`] when dropped.
///
/// This is what makes "every exit path restores the terminal" hold for early returns
/// and panics (unwinding) on the main thread. The interrupt path does not rely on it,
/// since it ends the process with [`std::process::exit()`].
#[derive(Debug)]
pub struct RawModeGuard<'a, T: TerminalSession + ?Sized> {
    session: &'a T,
}

impl<'a, T: TerminalSession + ?Sized> RawModeGuard<'a, T> {
    /// Acquire raw mode and return a guard that releases it.
    ///
    /// # Errors
    ///
    /// Returns miette diagnostic errors if raw mode cannot be acquired.
    /// See [`TerminalSession::acquire()`] for error conditions.
    pub fn new(session: &'a T) -> Result<Self, TerminalError> {
        session.acquire()?;
        Ok(Self { session })
    }
}

impl<T: TerminalSession + ?Sized> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) { self.session.release(); }
}
