// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rogdeck_tui::{run_main_event_loop, try_initialize_logging_global};
use tracing::info;

use crate::{AppMain, CLIArg};

/// Install logging (if asked for), then hand the terminal to the event loop until the
/// user quits. The terminal is restored before this returns, on success or error.
///
/// # Errors
///
/// Returns an error if the log file can't be created, if the terminal can't be put in
/// raw mode, or if a frame can't be written.
pub fn run_app(cli_arg: &CLIArg) -> miette::Result<()> {
    try_initialize_logging_global(cli_arg.global_options.tracing_config())?;
    info!(message = "Starting rogdeck", status_ttl = ?cli_arg.status_ttl());

    let mut app = AppMain::new(cli_arg.status_ttl());
    run_main_event_loop(&mut app)?;

    info!(message = "Stopping rogdeck");
    Ok(())
}
