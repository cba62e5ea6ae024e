// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TerminalFd;
use std::{collections::VecDeque, sync::Arc};

/// Size of one `read()` from the terminal. A burst larger than this (eg: a paste) is
/// simply picked up by the next call.
pub const READ_CHUNK_SIZE: usize = 64;

/// Where the [`KeyDecoder`] gets its bytes from.
///
/// [`Self::read_byte()`] blocks for at most one tick. `None` means no byte arrived
/// within the tick; a read error or end of stream must also be reported as `None`, so
/// a closing input stream degrades into idle ticks instead of crashing the loop.
///
/// [`KeyDecoder`]: crate::KeyDecoder
pub trait ByteSource {
    fn read_byte(&mut self) -> Option<u8>;
}

/// [`ByteSource`] backed by the controlling terminal.
///
/// The tick comes from the termios settings applied by [`RawModeController::acquire()`]
/// (`VMIN = 0`, `VTIME = 1`): `read()` returns after one byte or after 100ms of
/// silence. Bytes are read in chunks and queued so that a multi-byte sequence delivered
/// in one burst is not lost between calls.
///
/// [`RawModeController::acquire()`]: crate::RawModeController
#[derive(Debug)]
pub struct TtyByteSource {
    fd: Arc<TerminalFd>,
    pending: VecDeque<u8>,
}

impl TtyByteSource {
    #[must_use]
    pub fn new(fd: Arc<TerminalFd>) -> Self {
        Self {
            fd,
            pending: VecDeque::with_capacity(READ_CHUNK_SIZE),
        }
    }
}

impl ByteSource for TtyByteSource {
    fn read_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.pending.pop_front() {
            return Some(byte);
        }

        let mut chunk = [0_u8; READ_CHUNK_SIZE];
        match rustix::io::read(&*self.fd, &mut chunk[..]) {
            // VTIME expired with nothing typed.
            Ok(0) => None,
            Ok(count) => {
                self.pending.extend(&chunk[..count]);
                self.pending.pop_front()
            }
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::debug!(message = "tty read failed, treating as idle", %error);
                None
            }
        }
    }
}
