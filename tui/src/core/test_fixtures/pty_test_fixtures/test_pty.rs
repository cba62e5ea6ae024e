// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words openpt grantpt unlockpt ptsname NOCTTY CLOEXEC

use rustix::{fd::OwnedFd,
             fs::{Mode, OFlags},
             pty::{OpenptFlags, grantpt, openpt, ptsname, unlockpt}};
use std::{fs::File, io};

/// A pseudo-terminal pair, for tests that need a real tty without owning the one the
/// test runner is attached to.
///
/// Keep the whole struct alive for the duration of the test: once the master side is
/// closed, the slave is hung up and termios calls on it fail.
#[derive(Debug)]
pub struct TestPty {
    pub master: OwnedFd,
    pub slave: File,
}

/// Open a fresh PTY pair. Neither side becomes the controlling terminal of the test
/// process.
///
/// # Errors
///
/// Returns an error if the system has no PTY support or has run out of PTYs.
pub fn open_test_pty() -> io::Result<TestPty> {
    let master = openpt(OpenptFlags::RDWR | OpenptFlags::NOCTTY | OpenptFlags::CLOEXEC)?;
    grantpt(&master)?;
    unlockpt(&master)?;
    let slave_name = ptsname(&master, Vec::new())?;
    let slave = rustix::fs::open(
        slave_name.as_c_str(),
        OFlags::RDWR | OFlags::NOCTTY | OFlags::CLOEXEC,
        Mode::empty(),
    )?;
    Ok(TestPty {
        master,
        slave: File::from(slave),
    })
}
