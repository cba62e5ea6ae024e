// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// One decoded keypress, or the absence of one.
///
/// Exactly one variant per decoded event. Any byte sequence that does not match a
/// recognized pattern degrades to [`KeyEvent::Char`] or [`KeyEvent::Escape`]; the
/// [`KeyDecoder`] never fails.
///
/// [`KeyDecoder`]: crate::KeyDecoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// No byte arrived within one tick (or the input stream errored, or a NUL byte was
    /// read). Lets the event loop run timeout-driven work without blocking forever.
    Idle,
    /// A literal byte, carried as its code point. Bytes `>= 0x80` are not assembled
    /// into UTF-8 scalars.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Ctrl+C (byte 3). With `ISIG` off this arrives as a byte, not as `SIGINT`.
    CtrlInterrupt,
    /// Ctrl+Q (byte 17).
    CtrlQuit,
    /// Ctrl+S (byte 19).
    CtrlSave,
    /// Ctrl+R (byte 18).
    CtrlRefresh,
}

impl KeyEvent {
    #[must_use]
    pub fn is_idle(self) -> bool { matches!(self, KeyEvent::Idle) }
}

impl Display for KeyEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            KeyEvent::Idle => write!(f, "Idle"),
            KeyEvent::Char(ch) if ch.is_control() => {
                write!(f, "Char(0x{:02x})", u32::from(*ch))
            }
            KeyEvent::Char(ch) => write!(f, "Char('{ch}')"),
            KeyEvent::Enter => write!(f, "Enter"),
            KeyEvent::Escape => write!(f, "Escape"),
            KeyEvent::Backspace => write!(f, "Backspace"),
            KeyEvent::Tab => write!(f, "Tab"),
            KeyEvent::Delete => write!(f, "Delete"),
            KeyEvent::Up => write!(f, "Up"),
            KeyEvent::Down => write!(f, "Down"),
            KeyEvent::Left => write!(f, "Left"),
            KeyEvent::Right => write!(f, "Right"),
            KeyEvent::Home => write!(f, "Home"),
            KeyEvent::End => write!(f, "End"),
            KeyEvent::PageUp => write!(f, "PageUp"),
            KeyEvent::PageDown => write!(f, "PageDown"),
            KeyEvent::CtrlInterrupt => write!(f, "Ctrl+C"),
            KeyEvent::CtrlQuit => write!(f, "Ctrl+Q"),
            KeyEvent::CtrlSave => write!(f, "Ctrl+S"),
            KeyEvent::CtrlRefresh => write!(f, "Ctrl+R"),
        }
    }
}
