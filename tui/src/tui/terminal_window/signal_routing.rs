// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words sigwinch sigint sigterm

//! OS signal routing for the event loop.
//!
//! | Signal              | Path                                                   |
//! | :------------------ | :----------------------------------------------------- |
//! | `SIGWINCH`          | sets the pending-resize flag, drained by the main loop |
//! | `SIGINT`, `SIGTERM` | interrupt thread: [`release()`], then exit(0)          |
//!
//! Neither path renders. The resize flag is set from signal context by
//! [`signal_hook::flag`], which only does an atomic store. The interrupt path runs on an
//! ordinary thread fed by [`signal_hook::iterator::Signals`], so taking the output device
//! lock inside [`release()`] is safe there. It does not wait for the main loop, which
//! may be parked in a `read()` on the terminal for up to one tick.
//!
//! Raw mode clears `ISIG`, so Ctrl+C typed at the keyboard arrives as byte `3` (see
//! [`KeyEvent::CtrlInterrupt`]), not as `SIGINT`. These signals come from elsewhere: `kill`,
//! a closing session, a process supervisor.
//!
//! [`release()`]: crate::TerminalSession::release
//! [`KeyEvent::CtrlInterrupt`]: crate::KeyEvent::CtrlInterrupt

use crate::{TerminalError, TerminalSession};
use signal_hook::{SigId,
                  consts::{SIGINT, SIGTERM, SIGWINCH},
                  iterator::{Handle, Signals}};
use std::{sync::{Arc, atomic::AtomicBool},
          thread::JoinHandle};

/// Exit status used by the interrupt path.
pub const INTERRUPT_EXIT_CODE: i32 = 0;

/// Installed signal handlers. Dropping this uninstalls them and joins the interrupt
/// thread.
#[derive(Debug)]
pub struct SignalRouting {
    resize_sig_id: SigId,
    interrupt_handle: Handle,
    interrupt_thread: Option<JoinHandle<()>>,
}

impl SignalRouting {
    /// Route `SIGWINCH` into `resize_pending`, and `SIGINT`/`SIGTERM` into an immediate
    /// [`TerminalSession::release()`] followed by process exit.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::SignalRegistration`] if a handler can't be installed.
    pub fn try_install<T>(
        session: Arc<T>,
        resize_pending: Arc<AtomicBool>,
    ) -> Result<Self, TerminalError>
    where
        T: TerminalSession + ?Sized + 'static,
    {
        let resize_sig_id =
            signal_hook::flag::register(SIGWINCH, resize_pending)
                .map_err(|source| TerminalError::SignalRegistration { source })?;

        let mut signals = match Signals::new([SIGINT, SIGTERM]) {
            Ok(signals) => signals,
            Err(source) => {
                signal_hook::low_level::unregister(resize_sig_id);
                return Err(TerminalError::SignalRegistration { source });
            }
        };
        let interrupt_handle = signals.handle();

        let spawned = std::thread::Builder::new()
            .name("signal-routing".into())
            .spawn(move || {
                // Ends when the handle is closed on normal shutdown.
                if let Some(signal) = signals.forever().next() {
                    tracing::info!(message = "interrupt signal received", signal);
                    session.release();
                    std::process::exit(INTERRUPT_EXIT_CODE);
                }
            });
        let interrupt_thread = match spawned {
            Ok(thread) => thread,
            Err(source) => {
                interrupt_handle.close();
                signal_hook::low_level::unregister(resize_sig_id);
                return Err(TerminalError::SignalRegistration { source });
            }
        };

        tracing::debug!(message = "signal routing installed");
        Ok(Self {
            resize_sig_id,
            interrupt_handle,
            interrupt_thread: Some(interrupt_thread),
        })
    }
}

impl Drop for SignalRouting {
    fn drop(&mut self) {
        signal_hook::low_level::unregister(self.resize_sig_id);
        self.interrupt_handle.close();
        if let Some(thread) = self.interrupt_thread.take() {
            drop(thread.join());
        }
        tracing::debug!(message = "signal routing removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TerminalSessionMock;
    use serial_test::serial;
    use std::{sync::atomic::Ordering,
              time::{Duration, Instant}};

    fn wait_for(flag: &AtomicBool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if flag.load(Ordering::SeqCst) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    #[serial]
    fn test_sigwinch_sets_resize_pending() {
        let session = Arc::new(TerminalSessionMock::default());
        let resize_pending = Arc::new(AtomicBool::new(false));
        let _routing =
            SignalRouting::try_install(Arc::clone(&session), Arc::clone(&resize_pending))
                .unwrap();

        assert!(!resize_pending.load(Ordering::SeqCst));
        signal_hook::low_level::raise(SIGWINCH).unwrap();
        assert!(wait_for(&resize_pending));

        // Raised from the signal handler only; the session is untouched.
        assert!(!session.is_raw());
        assert_eq!(session.release_count(), 0);
    }

    #[test]
    #[serial]
    fn test_drop_uninstalls_without_releasing() {
        let session = Arc::new(TerminalSessionMock::default());
        session.acquire().unwrap();
        let resize_pending = Arc::new(AtomicBool::new(false));

        let routing =
            SignalRouting::try_install(Arc::clone(&session), Arc::clone(&resize_pending))
                .unwrap();
        drop(routing);

        // The interrupt thread has been joined, and it never touched the session.
        assert_eq!(Arc::strong_count(&session), 1);
        assert!(session.is_raw());
        assert_eq!(session.release_count(), 0);
    }
}
