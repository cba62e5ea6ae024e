// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI terminal layer: everything that speaks bytes to or from the tty.
//!
//! ## Key Subsystems
//!
//! - **Raw mode** ([`terminal_raw_mode`]): take the terminal out of cooked mode, onto the
//!   alternate screen, and back.
//! - **Input parser** ([`vt_100_terminal_input_parser`]): raw keyboard bytes →
//!   [`KeyEvent`]s.
//! - **Constants** ([`constants`]): the escape sequence vocabulary shared by both
//!   directions.
//!
//! ```text
//!   App draw calls                        User input (keyboard)
//!        ↓                                         ↓
//! ┌──────────────────────┐            ┌──────────────────────────┐
//! │  FrameCompositor     │            │  KeyDecoder              │
//! │  (one write/frame)   │            │  (vt_100_terminal_input_ │
//! └──────────┬───────────┘            │   parser)                │
//!            │                        └──────────┬───────────────┘
//!            ▼                                   ▲
//!      OutputDevice ◀── RawModeController ──▶ TerminalFd
//!      (stdout)          (termios)            (stdin or /dev/tty)
//! ```
//!
//! [`KeyEvent`]: crate::KeyEvent

// Attach.
pub mod constants;
pub mod sgr_code;
pub mod terminal_raw_mode;
pub mod vt_100_terminal_input_parser;

// Re-export.
pub use constants::*;
pub use sgr_code::*;
pub use terminal_raw_mode::*;
pub use vt_100_terminal_input_parser::*;
