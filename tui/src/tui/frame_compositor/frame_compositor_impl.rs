// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CSI_START, CURSOR_HOME, HIDE_CURSOR, OutputDevice, RgbValue, SHOW_CURSOR,
            SgrCode, TerminalError, lock_output_device_as_mut};
use std::fmt::{Display, Write as _};

/// Initial capacity of the frame buffer. A full 80x24 frame with per-cell colors runs
/// to a few tens of KB, so this avoids most regrowth.
pub const FRAME_BUFFER_INITIAL_CAPACITY: usize = 32 * 1024;

/// Accumulates one frame of escape sequences and text, and transmits it on
/// [`Self::flush()`].
///
/// All the drawing methods are pure appends to the in-memory buffer. Nothing reaches the
/// terminal until [`Self::flush()`], which writes the frame as one contiguous
/// transmission while holding the [`OutputDevice`] lock. That same lock guards the
/// restoration sequences written by [`TerminalSession::release()`], so a frame and a
/// shutdown can never interleave on the wire.
///
/// Coordinates are 0-indexed columns (`x`) and rows (`y`).
///
/// [`TerminalSession::release()`]: crate::TerminalSession::release
#[derive(Debug)]
pub struct FrameCompositor {
    buffer: String,
    output_device: OutputDevice,
}

impl FrameCompositor {
    #[must_use]
    pub fn new(output_device: OutputDevice) -> Self {
        Self {
            buffer: String::with_capacity(FRAME_BUFFER_INITIAL_CAPACITY),
            output_device,
        }
    }

    /// Everything appended since the last [`Self::clear()`] or [`Self::flush()`].
    #[must_use]
    pub fn buffer(&self) -> &str { &self.buffer }

    pub fn clear(&mut self) { self.buffer.clear(); }

    fn push(&mut self, directive: impl Display) {
        // Writing to a `String` can't fail.
        _ = write!(self.buffer, "{directive}");
    }

    /// `ESC [ row ; col H`, 1-indexed on the wire.
    pub fn move_to(&mut self, x: u16, y: u16) {
        let row = u32::from(y) + 1;
        let col = u32::from(x) + 1;
        _ = write!(self.buffer, "{CSI_START}{row};{col}H");
    }

    pub fn set_fg(&mut self, red: u8, green: u8, blue: u8) {
        self.push(SgrCode::ForegroundRGB(red, green, blue));
    }

    pub fn set_bg(&mut self, red: u8, green: u8, blue: u8) {
        self.push(SgrCode::BackgroundRGB(red, green, blue));
    }

    pub fn fg(&mut self, color: RgbValue) { self.push(SgrCode::fg(color)); }

    pub fn bg(&mut self, color: RgbValue) { self.push(SgrCode::bg(color)); }

    pub fn reset_style(&mut self) { self.push(SgrCode::Reset); }

    pub fn bold(&mut self) { self.push(SgrCode::Bold); }

    pub fn dim(&mut self) { self.push(SgrCode::Dim); }

    pub fn underline(&mut self) { self.push(SgrCode::Underline); }

    pub fn reverse_video(&mut self) { self.push(SgrCode::Invert); }

    /// Literal text, at the current cursor position, in the current style.
    pub fn write(&mut self, text: &str) { self.buffer.push_str(text); }

    /// Transmit the frame: hide cursor, home, the accumulated buffer, show cursor, as a
    /// single write under the output lock. The buffer is consumed either way.
    ///
    /// If the terminal was released before the lock was obtained, the frame is dropped
    /// and this returns `Ok`: the screen it was drawn for is gone.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Io`] if the write fails. A failed write may have been
    /// partially delivered by the OS; there is no retry.
    pub fn flush(&mut self) -> Result<(), TerminalError> {
        let mut frame = String::with_capacity(
            HIDE_CURSOR.len() + CURSOR_HOME.len() + self.buffer.len() + SHOW_CURSOR.len(),
        );
        frame.push_str(HIDE_CURSOR);
        frame.push_str(CURSOR_HOME);
        frame.push_str(&self.buffer);
        frame.push_str(SHOW_CURSOR);
        self.buffer.clear();

        let out = lock_output_device_as_mut!(self.output_device);
        if self.output_device.is_closed() {
            tracing::debug!(message = "frame dropped, terminal released", len = frame.len());
            return Ok(());
        }
        out.write_all(frame.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
