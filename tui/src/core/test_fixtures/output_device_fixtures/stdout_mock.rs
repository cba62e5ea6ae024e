// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::OutputDevice;
use std::{io::{Result, Write},
          sync::{Arc, Mutex, MutexGuard, PoisonError}};
use strip_ansi_escapes::strip;

/// Captures everything written to it, and remembers how each byte arrived.
///
/// You can safely clone this struct: clones share the same inner buffers, so a test can
/// hand one clone to an [`OutputDevice`] and inspect the other.
///
/// Every call to [`Write::write()`] is recorded as one *transmission*. Since the mock
/// always accepts the whole slice, one `write_all()` is exactly one transmission, which
/// is how tests check that a frame reaches the terminal in a single write.
///
/// The main constructors are:
/// - [`StdoutMock::default`]
/// - [`OutputDeviceExt::new_mock()`]
///
/// [`OutputDevice`]: crate::OutputDevice
#[derive(Clone, Debug, Default)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
    pub transmissions: Arc<Mutex<Vec<Vec<u8>>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl StdoutMock {
    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { lock(&self.buffer).clone() }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&lock(&self.buffer)).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let stripped = strip(lock(&self.buffer).as_slice());
        String::from_utf8_lossy(&stripped).into_owned()
    }

    #[must_use]
    pub fn transmission_count(&self) -> usize { lock(&self.transmissions).len() }

    /// Each recorded write, in order, as a (lossy) string.
    #[must_use]
    pub fn get_transmissions_as_strings(&self) -> Vec<String> {
        lock(&self.transmissions)
            .iter()
            .map(|it| String::from_utf8_lossy(it).into_owned())
            .collect()
    }

    pub fn clear(&self) {
        lock(&self.buffer).clear();
        lock(&self.transmissions).clear();
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        lock(&self.buffer).extend_from_slice(buf);
        lock(&self.transmissions).push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// Test-side constructor for an [`OutputDevice`] whose writes land in a [`StdoutMock`].
pub trait OutputDeviceExt {
    /// The device to hand to the code under test, and a clone of the mock that sees
    /// everything written to it.
    fn new_mock() -> (OutputDevice, StdoutMock);
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock() -> (OutputDevice, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let device = OutputDevice::new(Arc::new(Mutex::new(stdout_mock.clone())), true);
        (device, stdout_mock)
    }
}
