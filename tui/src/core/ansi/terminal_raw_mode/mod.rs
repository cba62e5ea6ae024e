// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios VMIN VTIME stty

//! Terminal raw mode for ANSI terminals: the Raw-Mode Controller.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C sends `SIGINT`, Ctrl+Q/S do flow
//!   control)
//! - Echoing is enabled (typed characters appear on screen)
//!
//! **Raw Mode**:
//! - No line buffering - bytes available immediately
//! - No special character processing - Ctrl+C arrives as byte `3`
//! - No echo - typed characters don't automatically appear
//!
//! ## The tick
//!
//! Unlike a `cfmakeraw()` setup (`VMIN=1`, `VTIME=0`, block until a byte arrives), this
//! controller sets `VMIN=0`, `VTIME=1`: `read()` returns after one byte **or** after
//! 100ms of silence. That bounded read is the only suspension point of the
//! [`EventLoop`], and it is what gives the loop a periodic tick without a timer thread.
//!
//! ## Debugging with `stty`
//!
//! [`RawModeController`] calls `tcgetattr()` and `tcsetattr()` (via rustix), the same
//! termios API `stty` uses. If a crash ever leaves your shell in raw mode, `stty sane`
//! (typed blind, followed by Ctrl+J) restores it; `stty -a` shows the current flags.
//!
//! ## Usage
//!
//! ```no_run
//! use rogdeck_tui::{OutputDevice, RawModeController, RawModeGuard};
//!
//! let controller = RawModeController::try_new(OutputDevice::new_stdout())?;
//! {
//!     let _guard = RawModeGuard::new(&controller)?;
//!     // Terminal is now raw, on the alternate screen, cursor hidden.
//! } // Restored here, even on early return or panic.
//! # Ok::<(), rogdeck_tui::TerminalError>(())
//! ```
//!
//! [`EventLoop`]: crate::EventLoop

// Private modules (hide internal structure).
mod raw_mode_core;
mod raw_mode_unix;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;
pub use raw_mode_unix::*;
