// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError,
                atomic::{AtomicBool, Ordering}};

pub type SendRawTerminal = dyn std::io::Write + Send;
pub type SafeRawTerminal = Arc<Mutex<SendRawTerminal>>;
pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is
/// to use this macro in a separate block scope.
///
/// Usage example:
/// ```
/// use rogdeck_tui::{lock_output_device_as_mut, OutputDevice, LockedOutputDevice};
/// let device = OutputDevice::new_stdout();
/// { // Start a new block scope to avoid deadlock.
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"Hello, world!\n");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// The terminal's output stream, shared between the [`RawModeController`] and the
/// [`FrameCompositor`].
///
/// The mutex inside is the one exclusion primitive of the output side: a frame
/// [`flush()`] and the restoration sequences written by [`release()`] both hold it for
/// the whole write, so they can never interleave on the wire.
///
/// - It is safe to clone (clones share the same stream, mutex, and closed flag).
/// - To write to it, see [`Self::lock()`] or the [`lock_output_device_as_mut`] macro.
///
/// The closed flag is how a shutdown wins against a frame that is already built and
/// waiting for the lock: [`release()`] sets it while holding the lock, and [`flush()`]
/// checks it under the lock and drops the frame instead of drawing over the restored
/// screen. [`acquire()`] clears it.
///
/// [`FrameCompositor`]: crate::FrameCompositor
/// [`RawModeController`]: crate::RawModeController
/// [`flush()`]: crate::FrameCompositor::flush
/// [`release()`]: crate::TerminalSession::release
/// [`acquire()`]: crate::TerminalSession::acquire
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
    closed: Arc<AtomicBool>,
}

impl std::fmt::Debug for OutputDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDevice")
            .field("is_mock", &self.is_mock)
            .field("is_closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self { Self::new(Arc::new(Mutex::new(std::io::stdout())), false) }

    /// Wrap any shared writer. Starts open.
    #[must_use]
    pub fn new(resource: SafeRawTerminal, is_mock: bool) -> Self {
        Self {
            resource,
            is_mock,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Only meaningful while holding [`Self::lock()`]; that is what orders it against a
    /// concurrent [`FrameCompositor::flush()`].
    ///
    /// [`FrameCompositor::flush()`]: crate::FrameCompositor::flush
    pub fn set_closed(&self, closed: bool) { self.closed.store(closed, Ordering::SeqCst); }

    #[must_use]
    pub fn is_closed(&self) -> bool { self.closed.load(Ordering::SeqCst) }

    /// Locks the output device for writing.
    ///
    /// A poisoned mutex is recovered rather than propagated: the terminal still has to
    /// be restored after a panic on another thread, and the stream itself is not
    /// corrupted by a panic in the middle of building a frame.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_output_device_is_not_mock() {
        let device = OutputDevice::new_stdout();
        assert!(!device.is_mock);
    }

    #[test]
    fn test_clones_share_the_same_stream() {
        let device = OutputDevice::new_stdout();
        let clone = device.clone();
        assert!(Arc::ptr_eq(&device.resource, &clone.resource));

        device.set_closed(true);
        assert!(clone.is_closed());
    }

    #[test]
    fn test_starts_open() {
        assert!(!OutputDevice::new_stdout().is_closed());
    }
}
