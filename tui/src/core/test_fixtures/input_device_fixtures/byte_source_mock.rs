// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ByteSource;
use std::collections::VecDeque;

/// A scripted [`ByteSource`].
///
/// Each queued entry is one read result: `Some(byte)` or a timeout (`None`). Once the
/// script runs out every read times out, which is what a silent keyboard looks like.
#[derive(Debug, Clone, Default)]
pub struct ByteSourceMock {
    script: VecDeque<Option<u8>>,
    consumed: usize,
}

impl ByteSourceMock {
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        let mut this = Self::default();
        this.push_bytes(bytes);
        this
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.script.extend(bytes.iter().copied().map(Some));
    }

    /// One tick with nothing typed.
    pub fn push_timeout(&mut self) { self.script.push_back(None); }

    /// Number of bytes handed out so far (timeouts are not counted).
    #[must_use]
    pub fn consumed(&self) -> usize { self.consumed }

    #[must_use]
    pub fn is_exhausted(&self) -> bool { self.script.is_empty() }
}

impl ByteSource for ByteSourceMock {
    fn read_byte(&mut self) -> Option<u8> {
        let maybe_byte = self.script.pop_front().flatten();
        if maybe_byte.is_some() {
            self.consumed += 1;
        }
        maybe_byte
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scripted_reads() {
        let mut source = ByteSourceMock::new(b"ab");
        source.push_timeout();
        source.push_bytes(b"c");

        assert_eq!(source.read_byte(), Some(b'a'));
        assert_eq!(source.read_byte(), Some(b'b'));
        assert_eq!(source.read_byte(), None);
        assert_eq!(source.read_byte(), Some(b'c'));
        assert!(source.is_exhausted());
        assert_eq!(source.read_byte(), None);
        assert_eq!(source.read_byte(), None);
        assert_eq!(source.consumed(), 3);
    }
}
