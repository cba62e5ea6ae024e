// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! VT100 keyboard input decoding for raw mode terminals.
//!
//! - [`ByteSource`]: where bytes come from ([`TtyByteSource`] in production).
//! - [`KeyDecoder`]: the state machine in [`keyboard`] that turns bytes into
//!   [`KeyEvent`]s.
//!
//! Only the small set of keys a panel app needs is recognized: control chords, Tab,
//! Enter, Backspace, arrows, Home/End, Delete, Page Up/Down. Everything else degrades to
//! a literal [`KeyEvent::Char`] or a bare [`KeyEvent::Escape`].

// Attach.
pub mod byte_source;
pub mod key_event;
pub mod keyboard;

// Re-export.
pub use byte_source::*;
pub use key_event::*;
pub use keyboard::*;
