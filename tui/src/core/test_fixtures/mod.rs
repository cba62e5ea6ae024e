// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test doubles for the terminal: a capturing stdout, a scripted byte source, a
//! session that never touches a real tty, and a PTY pair for termios tests.

// Attach sources.
pub mod input_device_fixtures;
pub mod output_device_fixtures;
pub mod pty_test_fixtures;
pub mod terminal_session_fixtures;

// Re-export.
pub use input_device_fixtures::*;
pub use output_device_fixtures::*;
pub use pty_test_fixtures::*;
pub use terminal_session_fixtures::*;
