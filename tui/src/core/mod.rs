// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi;
pub mod common;
pub mod dimens;
pub mod log;
pub mod misc;
pub mod terminal_io;
pub mod test_fixtures;
pub mod tui_style;

// Re-export.
pub use ansi::*;
pub use common::*;
pub use dimens::*;
pub use log::*;
pub use misc::*;
pub use terminal_io::*;
pub use test_fixtures::*;
pub use tui_style::*;
