// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup.
//!
//! While the terminal is in raw mode and on the alternate screen, anything written to
//! stdout or stderr lands in the middle of a frame. So apps built on this crate log to
//! a file ([`WriterConfig::File`]); the display writers exist for tools that run before
//! raw mode is acquired or never acquire it.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
