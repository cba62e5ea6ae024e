// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The Event-Loop Scheduler.
//!
//! One thread, one pass per iteration:
//!
//! ```text
//!        ┌──────────────────────────────────────────────────────────┐
//!        ▼                                                          │
//! resize pending? ──yes──▶ re-query size ──▶ render ────────────────┤
//!        │ no                                                       │
//!        ▼                                                          │
//! read_key() (≤ 1 tick)                                             │
//!        │                                                          │
//!        ├── Idle ──▶ transient status? ──yes──▶ render ────────────┤
//!        │                   └──no─────────────────────────────────▶┤
//!        │                                                          │
//!        └── key ──▶ app.handle_key() ──Continue──▶ render ─────────┘
//!                           │
//!                          Stop ──▶ return
//! ```
//!
//! The only suspension point is the bounded `read()` inside the [`KeyDecoder`].
//! Interrupt signals bypass this loop entirely, see [`SignalRouting`].

use super::{App, SignalRouting};
use crate::{ByteSource, Continuation, FrameCompositor, KeyDecoder, OutputDevice,
            RawModeController, RawModeGuard, Size, TerminalError, TerminalSession,
            TtyByteSource};
use std::sync::{Arc,
                atomic::{AtomicBool, Ordering}};

/// Owns the terminal session, the key decoder, and the frame compositor, and drives an
/// [`App`] with them.
///
/// Generic over the [`TerminalSession`] and the [`ByteSource`] so it can run against
/// [`TerminalSessionMock`] and [`ByteSourceMock`] in tests. [`run_main_event_loop()`]
/// wires up the real ones.
///
/// [`TerminalSessionMock`]: crate::TerminalSessionMock
/// [`ByteSourceMock`]: crate::ByteSourceMock
#[derive(Debug)]
pub struct EventLoop<T: TerminalSession + ?Sized, S: ByteSource> {
    session: Arc<T>,
    decoder: KeyDecoder<S>,
    compositor: FrameCompositor,
    resize_pending: Arc<AtomicBool>,
    size: Size,
}

impl<T: TerminalSession + ?Sized, S: ByteSource> EventLoop<T, S> {
    pub fn new(session: Arc<T>, source: S, output_device: OutputDevice) -> Self {
        let size = session.query_dimensions();
        Self {
            session,
            decoder: KeyDecoder::new(source),
            compositor: FrameCompositor::new(output_device),
            resize_pending: Arc::new(AtomicBool::new(false)),
            size,
        }
    }

    /// The flag a `SIGWINCH` handler sets. Hand this to [`SignalRouting::try_install()`].
    #[must_use]
    pub fn resize_pending(&self) -> Arc<AtomicBool> { Arc::clone(&self.resize_pending) }

    /// Dimensions as of the last query.
    #[must_use]
    pub fn size(&self) -> Size { self.size }

    /// Render once, then loop until `app` returns [`Continuation::Stop`].
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Io`] if a frame can't be written.
    pub fn run(&mut self, app: &mut impl App) -> miette::Result<()> {
        tracing::info!(message = "event loop started", size = %self.size);
        self.render(app)?;
        loop {
            if self.step(app)?.is_stop() {
                break;
            }
        }
        tracing::info!(message = "event loop stopped");
        Ok(())
    }

    /// One pass of the loop.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Io`] if a frame can't be written.
    pub fn step(&mut self, app: &mut impl App) -> Result<Continuation, TerminalError> {
        // Resize first, and skip the read for this pass.
        if self.resize_pending.swap(false, Ordering::SeqCst) {
            self.size = self.session.query_dimensions();
            tracing::debug!(message = "terminal resized", size = ?self.size);
            self.render(app)?;
            return Ok(Continuation::Continue);
        }

        let key = self.decoder.read_key();

        if key.is_idle() {
            let needs_redraw = app.has_transient_status();
            app.on_tick();
            if needs_redraw {
                self.render(app)?;
            }
            return Ok(Continuation::Continue);
        }

        tracing::debug!(message = "dispatching key", %key);
        match app.handle_key(key) {
            Continuation::Stop => Ok(Continuation::Stop),
            Continuation::Continue => {
                self.render(app)?;
                Ok(Continuation::Continue)
            }
        }
    }

    fn render(&mut self, app: &mut impl App) -> Result<(), TerminalError> {
        self.compositor.clear();
        app.render(&mut self.compositor, self.size);
        self.compositor.flush()
    }
}

/// Take over the controlling terminal and run `app` until it stops.
///
/// 1. Acquire raw mode (alternate screen, hidden cursor) behind a [`RawModeGuard`].
/// 2. Install [`SignalRouting`] for `SIGWINCH`, `SIGINT`, and `SIGTERM`.
/// 3. Run the [`EventLoop`] on stdout and the terminal's input.
///
/// The terminal is restored on every way out of this function: normal stop, error, or
/// panic (via the guard's `Drop`). `SIGINT`/`SIGTERM` restore it and exit the process
/// directly.
///
/// # Errors
///
/// Returns [`TerminalError::TerminalUnavailable`] if there is no terminal to take over,
/// [`TerminalError::SignalRegistration`] if the handlers can't be installed, and
/// [`TerminalError::Io`] if a frame can't be written.
pub fn run_main_event_loop(app: &mut impl App) -> miette::Result<()> {
    let output_device = OutputDevice::new_stdout();
    let controller = Arc::new(RawModeController::try_new(output_device.clone())?);
    let _guard = RawModeGuard::new(&*controller)?;

    let source = TtyByteSource::new(controller.terminal_fd());
    let mut event_loop = EventLoop::new(Arc::clone(&controller), source, output_device);
    let _signal_routing =
        SignalRouting::try_install(Arc::clone(&controller), event_loop.resize_pending())?;

    event_loop.run(app)
}
