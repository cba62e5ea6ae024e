// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Global [miette](https://docs.rs/miette/latest/miette/index.html) report handler.
//!
//! The hook registered with [`miette::set_hook`] is only evaluated when a report is
//! actually displayed (eg: `main() -> miette::Result<_>` returning an error). So the
//! terminal width is measured just before the output is generated, after the terminal
//! has already been restored to cooked mode.

use crate::query_terminal_size;
use miette::MietteHandlerOpts;
use tracing::debug;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
///
/// `footer` is printed under every report, eg: a hint on where to look next.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = usize::from(query_terminal_size().col_width);
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
