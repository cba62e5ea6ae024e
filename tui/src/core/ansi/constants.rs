// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence vocabulary, on both sides of the wire.
//!
//! ## Output (written by the compositor and the raw mode controller)
//!
//! These must match bit for bit for terminal compatibility:
//!
//! | Directive              | Sequence            |
//! | :--------------------- | :------------------ |
//! | Enter alternate screen | `ESC [ ?1049h`      |
//! | Exit alternate screen  | `ESC [ ?1049l`      |
//! | Hide / show cursor     | `ESC [ ?25l` / `?25h` |
//! | Cursor position        | `ESC [ row ; col H` (1-indexed) |
//! | 24-bit foreground      | `ESC [ 38;2;r;g;b m` |
//! | 24-bit background      | `ESC [ 48;2;r;g;b m` |
//! | Reset/bold/dim/underline/reverse | `ESC [ 0/1/2/4/7 m` |
//!
//! ## Input (bytes produced by the keyboard in raw mode)
//!
//! Control bytes and the CSI final bytes recognized by the [`KeyDecoder`].
//!
//! [`KeyDecoder`]: crate::KeyDecoder

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Output: terminal modes.

/// ESC [ ?1049h - switch to the alternate screen buffer.
pub const ENTER_ALTERNATE_SCREEN: &str = "\x1b[?1049h";
/// ESC [ ?1049l - switch back to the main screen buffer.
pub const EXIT_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
/// ESC [ ?25l - hide the cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";
/// ESC [ ?25h - show the cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";
/// ESC [ H - cursor to row 1, col 1.
pub const CURSOR_HOME: &str = "\x1b[H";

// Output: SGR (Select Graphic Rendition) style codes.

pub const SGR_RESET: &str = "\x1b[0m";
pub const SGR_BOLD: &str = "\x1b[1m";
pub const SGR_DIM: &str = "\x1b[2m";
pub const SGR_UNDERLINE: &str = "\x1b[4m";
pub const SGR_REVERSE: &str = "\x1b[7m";

/// CSI introducer, used to build parameterized sequences.
pub const CSI_START: &str = "\x1b[";
/// SGR parameter prefix for a 24-bit foreground color.
pub const SGR_FG_RGB_PREFIX: &str = "38;2";
/// SGR parameter prefix for a 24-bit background color.
pub const SGR_BG_RGB_PREFIX: &str = "48;2";

// Input: single byte keys.

/// NUL. Some terminals send this for Ctrl+Space; decoded as an idle tick.
pub const NUL: u8 = 0x00;
/// Ctrl+C (ETX).
pub const CTRL_C: u8 = 3;
/// Horizontal Tab (HT).
pub const TAB: u8 = b'\t';
/// Line Feed (LF).
pub const LINE_FEED: u8 = b'\n';
/// Carriage Return (CR).
pub const CARRIAGE_RETURN: u8 = b'\r';
/// Ctrl+Q (DC1).
pub const CTRL_Q: u8 = 17;
/// Ctrl+R (DC2).
pub const CTRL_R: u8 = 18;
/// Ctrl+S (DC3).
pub const CTRL_S: u8 = 19;
/// Escape (ESC), also the first byte of every escape sequence.
pub const ESC: u8 = 0x1b;
/// DEL, which is what the Backspace key sends in raw mode.
pub const DEL: u8 = 127;

// Input: CSI sequences (ESC [ ...).

/// Second byte of a CSI sequence.
pub const CSI_BRACKET: u8 = b'[';
pub const CSI_UP: u8 = b'A';
pub const CSI_DOWN: u8 = b'B';
pub const CSI_RIGHT: u8 = b'C';
pub const CSI_LEFT: u8 = b'D';
pub const CSI_HOME: u8 = b'H';
pub const CSI_END: u8 = b'F';
/// ESC [ 3 ~
pub const CSI_DELETE_PARAM: u8 = b'3';
/// ESC [ 5 ~
pub const CSI_PAGE_UP_PARAM: u8 = b'5';
/// ESC [ 6 ~
pub const CSI_PAGE_DOWN_PARAM: u8 = b'6';
/// Terminator of the `ESC [ n ~` family.
pub const CSI_TILDE: u8 = b'~';
