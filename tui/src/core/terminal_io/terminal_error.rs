// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// Errors surfaced by the terminal substrate.
///
/// Only [`TerminalError::TerminalUnavailable`] and [`TerminalError::SignalRegistration`]
/// are fatal, and only at startup. Input read failures never show up here: the
/// [`KeyDecoder`] treats them as an idle tick. Failures during
/// [`TerminalSession::release()`] are swallowed.
///
/// [`KeyDecoder`]: crate::KeyDecoder
/// [`TerminalSession::release()`]: crate::TerminalSession::release
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum TerminalError {
    /// Raw mode could not be acquired: not attached to a terminal, or the termios
    /// query/apply call failed. The original mode is left untouched.
    #[error("Terminal unavailable: {reason}")]
    #[diagnostic(
        code(rogdeck_tui::terminal::unavailable),
        help("Make sure you're running this in a terminal.")
    )]
    TerminalUnavailable { reason: String },

    /// The OS signal handlers for resize or interrupt could not be installed.
    #[error("Failed to register signal handlers")]
    #[diagnostic(code(rogdeck_tui::terminal::signal_registration))]
    SignalRegistration {
        #[source]
        source: std::io::Error,
    },

    /// A frame could not be written to the output stream.
    #[error("Failed to write frame to the terminal")]
    #[diagnostic(code(rogdeck_tui::terminal::io))]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TerminalError {
    pub fn unavailable(reason: impl std::fmt::Display) -> Self {
        Self::TerminalUnavailable {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unavailable_message() {
        let error = TerminalError::unavailable("tcgetattr failed: ENOTTY");
        assert_eq!(
            error.to_string(),
            "Terminal unavailable: tcgetattr failed: ENOTTY"
        );
        assert_eq!(
            error.code().map(|it| it.to_string()),
            Some("rogdeck_tui::terminal::unavailable".to_string())
        );
    }

    #[test]
    fn test_io_from() {
        let error: TerminalError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(error, TerminalError::Io { .. }));
    }
}
