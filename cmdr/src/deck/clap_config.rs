// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use clap::{Args, Parser};
use rogdeck_tui::{TracingConfig, WriterConfig};
use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE: &str = "log.txt";
pub const DEFAULT_STATUS_TTL_MS: u64 = 3_000;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "rogdeck")]
#[command(about = "🎛  Laptop control panel in your terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  rogdeck [\x1b[34moptions\x1b[0m]\n\nKEYS ⌨:\n  1-4 / Tab switch tabs, ↑↓ focus, ←→ adjust, Enter apply, Ctrl+S save, Ctrl+R redraw, q / Ctrl+Q / Ctrl+C quit\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        value_name = "MILLIS",
        default_value_t = DEFAULT_STATUS_TTL_MS,
        help = "How long a status message stays in the footer."
    )]
    pub status_ttl_ms: u64,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging (see --log-file)."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE,
        help = "Where to write the log when logging is enabled."
    )]
    pub log_file: String,
}

impl CLIArg {
    #[must_use]
    pub fn status_ttl(&self) -> Duration { Duration::from_millis(self.status_ttl_ms) }
}

impl GlobalOption {
    /// Logs only ever go to a file: anything written to stdout or stderr while the
    /// terminal is raw would tear the frame.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        if self.enable_logging {
            TracingConfig::new_file(self.log_file.clone())
        } else {
            TracingConfig {
                writer_config: WriterConfig::None,
                level_filter: LevelFilter::OFF,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_is_well_formed() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["rogdeck"]).unwrap();
        assert!(!cli_arg.global_options.enable_logging);
        assert_eq!(cli_arg.global_options.log_file, DEFAULT_LOG_FILE);
        assert_eq!(cli_arg.status_ttl(), Duration::from_secs(3));
        assert_eq!(
            cli_arg.global_options.tracing_config().writer_config,
            WriterConfig::None
        );
    }

    #[test]
    fn test_logging_goes_to_the_named_file() {
        let cli_arg = CLIArg::try_parse_from([
            "rogdeck",
            "-l",
            "--log-file",
            "/tmp/rogdeck.log",
            "--status-ttl-ms",
            "500",
        ])
        .unwrap();
        let config = cli_arg.global_options.tracing_config();
        assert_eq!(
            config.writer_config,
            WriterConfig::File("/tmp/rogdeck.log".into())
        );
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(cli_arg.status_ttl(), Duration::from_millis(500));
    }

    #[test]
    fn test_rejects_non_numeric_ttl() {
        assert!(CLIArg::try_parse_from(["rogdeck", "--status-ttl-ms", "soon"]).is_err());
    }
}
