// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tcgetattr tcsetattr tcgetwinsize VMIN VTIME ICANON IEXTEN ISIG OPOST
// cspell:words BRKINT ICRNL INPCK ISTRIP IXON

//! Unix/Linux/macOS implementation of raw mode using rustix's safe termios API.

use super::TerminalSession;
use crate::{ENTER_ALTERNATE_SCREEN, EXIT_ALTERNATE_SCREEN, HIDE_CURSOR, OutputDevice,
            SHOW_CURSOR, Size, TerminalError, lock_output_device_as_mut};
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, ControlModes, InputModes, LocalModes, OptionalActions,
                       OutputModes, SpecialCodeIndex, Termios}};
use std::{fs::File,
          io,
          sync::{Arc, OnceLock,
                 atomic::{AtomicBool, Ordering}}};

/// `VTIME` is in deciseconds: `read()` returns after 100ms of silence. This is the tick
/// of the [`EventLoop`].
///
/// [`EventLoop`]: crate::EventLoop
pub const READ_TIMEOUT_DECISECONDS: u8 = 1;

/// Represents either stdin or an opened tty device for terminal operations.
///
/// This enum allows us to handle both cases where stdin is a tty (normal terminal usage)
/// and where stdin is redirected (e.g., piped input), requiring us to use `/dev/tty`.
#[derive(Debug)]
pub enum TerminalFd {
    /// Using standard input (when it's a terminal).
    Stdin(io::Stdin),
    /// Using an opened tty device: `/dev/tty` when stdin is redirected, or a PTY slave
    /// in tests.
    Tty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::Tty(file) => file.as_fd(),
        }
    }
}

impl TerminalFd {
    /// Gets a file descriptor for the controlling terminal.
    ///
    /// Checks if stdin is a tty and uses it if so; otherwise opens `/dev/tty`. The same
    /// descriptor is used for mode changes and for reading keys, so piped stdin does not
    /// get mistaken for keyboard input.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin is not a tty and `/dev/tty` cannot be opened.
    pub fn open_controlling() -> io::Result<Self> {
        let stdin = io::stdin();
        if termios::isatty(&stdin) {
            Ok(TerminalFd::Stdin(stdin))
        } else {
            let file = File::options().read(true).write(true).open("/dev/tty")?;
            Ok(TerminalFd::Tty(file))
        }
    }
}

/// Compute raw settings from `original`:
/// - Input: no break-to-`SIGINT`, no CR to NL, no parity check, no strip, no XON/XOFF.
/// - Output: no post-processing.
/// - Control: 8-bit characters.
/// - Local: no echo, no canonical mode, no extended processing, no signal generation.
/// - `read()` returns after 1 byte or [`READ_TIMEOUT_DECISECONDS`] with no data.
#[must_use]
pub fn make_raw_with_tick(original: &Termios) -> Termios {
    let mut raw = original.clone();
    raw.input_modes.remove(
        InputModes::BRKINT
            | InputModes::ICRNL
            | InputModes::INPCK
            | InputModes::ISTRIP
            | InputModes::IXON,
    );
    raw.output_modes.remove(OutputModes::OPOST);
    raw.control_modes.insert(ControlModes::CS8);
    raw.local_modes.remove(
        LocalModes::ECHO | LocalModes::ICANON | LocalModes::IEXTEN | LocalModes::ISIG,
    );
    raw.special_codes[SpecialCodeIndex::VMIN] = 0;
    raw.special_codes[SpecialCodeIndex::VTIME] = READ_TIMEOUT_DECISECONDS;
    raw
}

/// Query the window size of `fd`, floor-clamped. Falls back to [`Size::DEFAULT`] when
/// the `TIOCGWINSZ` query fails (eg: not a tty).
pub fn size_from_fd(fd: impl AsFd) -> Size {
    match termios::tcgetwinsize(fd) {
        Ok(winsize) => Size::clamped(winsize.ws_col, winsize.ws_row),
        Err(_) => Size::DEFAULT,
    }
}

/// Dimensions of the terminal attached to stdout. Never fails.
#[must_use]
pub fn query_terminal_size() -> Size { size_from_fd(io::stdout()) }

/// The production [`TerminalSession`].
///
/// Holds the original termios snapshot (set once, read lock-free afterwards), the "is
/// currently raw" flag, and a clone of the shared [`OutputDevice`]. The flag is what
/// makes [`TerminalSession::release()`] idempotent: whoever flips it from `true` to
/// `false` performs the restoration, every other caller returns immediately. No lock is
/// taken for that decision; the only lock involved is the output device mutex, held
/// while the restoration sequences and the termios apply happen, so a concurrent frame
/// flush can never interleave with them. Release also marks the output device closed,
/// so a frame flushed after it is dropped.
pub struct RawModeController {
    fd: Arc<TerminalFd>,
    output_device: OutputDevice,
    original_termios: OnceLock<Termios>,
    is_raw: AtomicBool,
}

impl std::fmt::Debug for RawModeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawModeController")
            .field("fd", &self.fd)
            .field("output_device", &self.output_device)
            .field("has_original_termios", &self.original_termios.get().is_some())
            .field("is_raw", &self.is_raw())
            .finish()
    }
}

impl RawModeController {
    /// Open the controlling terminal. Stays in cooked mode until
    /// [`TerminalSession::acquire()`].
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::TerminalUnavailable`] if there is no controlling
    /// terminal to open.
    pub fn try_new(output_device: OutputDevice) -> Result<Self, TerminalError> {
        let fd = TerminalFd::open_controlling().map_err(|e| {
            TerminalError::unavailable(format!(
                "failed to get terminal file descriptor: {e}"
            ))
        })?;
        Ok(Self::with_terminal_fd(fd, output_device))
    }

    #[must_use]
    pub fn with_terminal_fd(fd: TerminalFd, output_device: OutputDevice) -> Self {
        Self {
            fd: Arc::new(fd),
            output_device,
            original_termios: OnceLock::new(),
            is_raw: AtomicBool::new(false),
        }
    }

    /// The descriptor keys are read from, see [`TtyByteSource`].
    ///
    /// [`TtyByteSource`]: crate::TtyByteSource
    #[must_use]
    pub fn terminal_fd(&self) -> Arc<TerminalFd> { Arc::clone(&self.fd) }

    /// Settings captured by the first successful [`TerminalSession::acquire()`].
    #[must_use]
    pub fn original_termios(&self) -> Option<&Termios> { self.original_termios.get() }

    fn apply(&self, settings: &Termios) -> rustix::io::Result<()> {
        termios::tcsetattr(&*self.fd, OptionalActions::Now, settings)
    }
}

impl TerminalSession for RawModeController {
    fn acquire(&self) -> Result<(), TerminalError> {
        if self.is_raw() {
            return Ok(());
        }

        let original = termios::tcgetattr(&*self.fd).map_err(|e| {
            TerminalError::unavailable(format!("failed to retrieve terminal attributes: {e}"))
        })?;

        self.apply(&make_raw_with_tick(&original)).map_err(|e| {
            TerminalError::unavailable(format!("failed to set terminal attributes: {e}"))
        })?;

        // Keep the very first snapshot: a later re-acquire must still restore to the
        // mode the process started in.
        let original = self.original_termios.get_or_init(|| original);

        let entered = {
            let out = lock_output_device_as_mut!(self.output_device);
            self.output_device.set_closed(false);
            out.write_all(ENTER_ALTERNATE_SCREEN.as_bytes())
                .and_then(|()| out.write_all(HIDE_CURSOR.as_bytes()))
                .and_then(|()| out.flush())
        };
        if let Err(e) = entered {
            drop(self.apply(original));
            return Err(TerminalError::unavailable(format!(
                "failed to switch to the alternate screen: {e}"
            )));
        }

        self.is_raw.store(true, Ordering::SeqCst);
        tracing::debug!(message = "raw mode acquired", fd = ?self.fd);
        Ok(())
    }

    fn release(&self) {
        if !self.is_raw.swap(false, Ordering::SeqCst) {
            return;
        }

        // Closed under the lock: a frame still waiting for it is dropped, not drawn
        // over the restored screen.
        let out = lock_output_device_as_mut!(self.output_device);
        self.output_device.set_closed(true);
        drop(out.write_all(SHOW_CURSOR.as_bytes()));
        drop(out.write_all(EXIT_ALTERNATE_SCREEN.as_bytes()));
        drop(out.flush());

        let Some(original) = self.original_termios.get() else {
            return;
        };
        match self.apply(original) {
            Ok(()) => tracing::debug!(message = "raw mode released"),
            // % is Display, ? is Debug.
            Err(error) => {
                tracing::warn!(message = "failed to restore terminal attributes", %error);
            }
        }
    }

    fn is_raw(&self) -> bool { self.is_raw.load(Ordering::SeqCst) }

    fn query_dimensions(&self) -> Size { size_from_fd(&*self.fd) }
}

impl Drop for RawModeController {
    fn drop(&mut self) { self.release(); }
}
