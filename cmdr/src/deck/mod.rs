// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Include.
pub mod app_main;
pub mod clap_config;
pub mod launcher;
pub mod state;
pub mod ui_str;

// Reexport.
pub use app_main::*;
pub use clap_config::*;
pub use launcher::*;
pub use state::*;
