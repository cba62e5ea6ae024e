// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Note that if you wrap this up in a non blocking writer, it doesn't work. Here's an
/// example of this:
/// `tracing_appender::non_blocking(try_create("foo")?)`
///
/// A bare file name (eg: `log.txt`) is created in the current directory.
///
/// # Errors
///
/// Returns an error if the path has no file name (eg: it ends in `..`), or if the file
/// or its parent directory can't be created.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let file_name = path
        .file_name()
        .and_then(|it| it.to_str())
        .ok_or_else(|| {
            miette::miette!(
                "Can't access file name {}. It might not exist, or don't have required permissions.",
                path.display()
            )
        })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .map_err(|error| {
            miette::miette!("Can't create log file {}: {error}", path.display())
        })
}
