// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios sigwinch

//! # `rogdeck_tui`
//!
//! The terminal control and rendering substrate for full-screen panel apps. It takes
//! exclusive control of a character terminal, renders frames built from raw escape
//! sequences, and decodes raw keyboard bytes into discrete [`KeyEvent`]s. No third-party
//! terminal library is involved: mode changes go straight to termios via [`rustix`].
//!
//! There are four components, leaves first:
//!
//! | Component            | Type                                        |
//! | :------------------- | :------------------------------------------ |
//! | Raw-Mode Controller  | [`RawModeController`] ([`TerminalSession`]) |
//! | Frame Compositor     | [`FrameCompositor`]                         |
//! | Key Decoder          | [`KeyDecoder`]                              |
//! | Event-Loop Scheduler | [`EventLoop`]                               |
//!
//! Your app plugs in through the [`App`] trait: it receives one [`KeyEvent`] per loop
//! pass and issues draw calls against the [`FrameCompositor`] when asked to render.
//!
//! ```no_run
//! use rogdeck_tui::{App, Continuation, FrameCompositor, KeyEvent, Size, palette,
//!                   run_main_event_loop};
//!
//! struct Hello;
//!
//! impl App for Hello {
//!     fn handle_key(&mut self, key: KeyEvent) -> Continuation {
//!         match key {
//!             KeyEvent::CtrlQuit | KeyEvent::CtrlInterrupt => Continuation::Stop,
//!             _ => Continuation::Continue,
//!         }
//!     }
//!
//!     fn render(&mut self, frame: &mut FrameCompositor, size: Size) {
//!         frame.fill_rect(0, 0, size.col_width, size.row_height, palette::BG);
//!         frame.text(2, 1, palette::TEXT, "Hello. Press Ctrl+Q to quit.");
//!     }
//!
//!     fn has_transient_status(&self) -> bool { false }
//! }
//!
//! fn main() -> miette::Result<()> { run_main_event_loop(&mut Hello) }
//! ```

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod tui;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
#[allow(ambiguous_glob_reexports)]
pub use core::*;
#[allow(ambiguous_glob_reexports)]
pub use tui::*;
