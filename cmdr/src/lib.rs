// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `rogdeck_cmdr`
//!
//! The `rogdeck` binary: a full-screen laptop control panel built on [`rogdeck_tui`].
//! It keeps all of its settings in memory and never runs an external command, so it
//! doubles as an end to end exercise of the terminal substrate: raw mode, single-write
//! frames, key decoding, resize, and interrupt handling.
//!
//! | Tab      | What it shows                                            |
//! | :------- | :------------------------------------------------------- |
//! | Profile  | Performance, Balanced, or Quiet power profile            |
//! | Keyboard | Backlight level with a brightness bar                    |
//! | Battery  | Charge limit bar, one-shot full charge toggle, reset     |
//! | Keys     | The last decoded key, plus a short history               |
//!
//! ```text
//! rogdeck                     # run with defaults
//! rogdeck -l                  # also log to ./log.txt
//! rogdeck --status-ttl-ms 500 # shorter lived footer messages
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::cast_sign_loss)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::items_after_statements)]
#![warn(clippy::needless_return)]
#![warn(clippy::unreadable_literal)]
#![warn(clippy::redundant_else)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::ignored_unit_patterns)]
#![warn(clippy::match_wildcard_for_single_variants)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::manual_instant_elapsed)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unused_self)]
#![warn(clippy::single_char_pattern)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::if_not_else)]
#![warn(clippy::unnecessary_wraps)]
#![warn(clippy::single_match_else)]
#![warn(clippy::return_self_not_must_use)]
#![warn(clippy::needless_pass_by_value)]

// Attach sources.
pub mod deck;

// Re-export.
pub use deck::*;

/// Footer for the global miette report handler.
pub const REPORT_FOOTER: &str =
    "Run again with --enable-logging and check the log file for details.";
