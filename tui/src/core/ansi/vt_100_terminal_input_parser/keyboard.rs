// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keyboard decoding: raw bytes in, [`KeyEvent`]s out.
//!
//! The decoder is a small explicit state machine. Each state records how much of an
//! escape sequence has been matched so far, and [`advance()`] consumes at most one byte
//! per transition, so the worst case per key is four reads and no allocation.
//!
//! ```text
//!            ESC               [              3|5|6
//! Ground ─────────▶ Escape ─────────▶ Csi ─────────▶ CsiParam(key)
//!   │                 │                │                  │
//!   │ other byte      │ timeout/other  │ A B C D H F      │ any byte or timeout
//!   ▼                 ▼                ▼                  ▼
//! single-byte key   Escape         arrow/Home/End     Delete/PageUp/PageDown
//! ```
//!
//! ## Escape vs. escape sequence
//!
//! A lone `ESC` keypress and the first byte of a cursor key sequence are the same byte.
//! They are told apart only by timing: after `ESC`, the next byte is awaited for one
//! tick (100ms). Terminals deliver sequences back-to-back far faster than that; a human
//! cannot retype `[` that quickly. This is a heuristic, not a protocol guarantee: a real
//! `ESC` press followed immediately by pasted `[A` decodes as [`KeyEvent::Up`].

use super::{ByteSource, KeyEvent};
use crate::{CARRIAGE_RETURN, CSI_BRACKET, CSI_DELETE_PARAM, CSI_DOWN, CSI_END,
            CSI_HOME, CSI_LEFT, CSI_PAGE_DOWN_PARAM, CSI_PAGE_UP_PARAM, CSI_RIGHT,
            CSI_UP, CTRL_C, CTRL_Q, CTRL_R, CTRL_S, DEL, ESC, LINE_FEED, NUL, TAB};

/// Partial-match position inside an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeState {
    /// Nothing consumed yet.
    #[default]
    Ground,
    /// Consumed `ESC`.
    Escape,
    /// Consumed `ESC [`.
    Csi,
    /// Consumed `ESC [ n` for `n` in `3`, `5`, `6`; waiting for the `~` terminator.
    CsiParam(KeyEvent),
}

/// Outcome of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// A complete event. The decoder returns to [`DecodeState::Ground`].
    Emit(KeyEvent),
    /// More bytes needed.
    Pending(DecodeState),
}

/// Feed one read result (`None` = no byte within the tick) into the state machine.
#[must_use]
pub fn advance(state: DecodeState, maybe_byte: Option<u8>) -> DecodeStep {
    use DecodeStep::{Emit, Pending};

    match (state, maybe_byte) {
        (DecodeState::Ground, None) => Emit(KeyEvent::Idle),
        (DecodeState::Ground, Some(ESC)) => Pending(DecodeState::Escape),
        (DecodeState::Ground, Some(byte)) => Emit(decode_single_byte(byte)),

        (DecodeState::Escape, Some(CSI_BRACKET)) => Pending(DecodeState::Csi),
        // Timeout, or any second byte other than `[` (which is dropped).
        (DecodeState::Escape, _) => Emit(KeyEvent::Escape),

        (DecodeState::Csi, Some(final_byte)) => match decode_csi_byte(final_byte) {
            CsiByte::Final(key) => Emit(key),
            CsiByte::NeedsTilde(key) => Pending(DecodeState::CsiParam(key)),
            CsiByte::Unrecognized => Emit(KeyEvent::Escape),
        },
        (DecodeState::Csi, None) => Emit(KeyEvent::Escape),

        // The terminator is consumed and discarded whatever it is. If it never arrives
        // the key is still emitted, so a truncated sequence cannot stall input.
        (DecodeState::CsiParam(key), _) => Emit(key),
    }
}

fn decode_single_byte(byte: u8) -> KeyEvent {
    match byte {
        NUL => KeyEvent::Idle,
        CTRL_C => KeyEvent::CtrlInterrupt,
        CTRL_Q => KeyEvent::CtrlQuit,
        CTRL_R => KeyEvent::CtrlRefresh,
        CTRL_S => KeyEvent::CtrlSave,
        TAB => KeyEvent::Tab,
        LINE_FEED | CARRIAGE_RETURN => KeyEvent::Enter,
        DEL => KeyEvent::Backspace,
        _ => KeyEvent::Char(char::from(byte)),
    }
}

enum CsiByte {
    Final(KeyEvent),
    NeedsTilde(KeyEvent),
    Unrecognized,
}

fn decode_csi_byte(byte: u8) -> CsiByte {
    match byte {
        CSI_UP => CsiByte::Final(KeyEvent::Up),
        CSI_DOWN => CsiByte::Final(KeyEvent::Down),
        CSI_RIGHT => CsiByte::Final(KeyEvent::Right),
        CSI_LEFT => CsiByte::Final(KeyEvent::Left),
        CSI_HOME => CsiByte::Final(KeyEvent::Home),
        CSI_END => CsiByte::Final(KeyEvent::End),
        CSI_DELETE_PARAM => CsiByte::NeedsTilde(KeyEvent::Delete),
        CSI_PAGE_UP_PARAM => CsiByte::NeedsTilde(KeyEvent::PageUp),
        CSI_PAGE_DOWN_PARAM => CsiByte::NeedsTilde(KeyEvent::PageDown),
        _ => CsiByte::Unrecognized,
    }
}

/// Turns a [`ByteSource`] into a stream of [`KeyEvent`]s, one per [`Self::read_key()`].
#[derive(Debug)]
pub struct KeyDecoder<S: ByteSource> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self { Self { source } }

    /// Blocks for at most one tick per byte of the longest recognized sequence, and
    /// never fails. Returns [`KeyEvent::Idle`] when nothing was typed.
    pub fn read_key(&mut self) -> KeyEvent {
        let mut state = DecodeState::Ground;
        loop {
            match advance(state, self.source.read_byte()) {
                DecodeStep::Emit(key) => return key,
                DecodeStep::Pending(next) => state = next,
            }
        }
    }

    pub fn source_mut(&mut self) -> &mut S { &mut self.source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteSourceMock;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    /// Decode the first event from `bytes`, and report how many bytes it consumed.
    fn decode_one(bytes: &[u8]) -> (KeyEvent, usize) {
        let mut decoder = KeyDecoder::new(ByteSourceMock::new(bytes));
        let key = decoder.read_key();
        (key, decoder.source_mut().consumed())
    }

    // ==================== Single Bytes ====================

    #[test_case(3, KeyEvent::CtrlInterrupt ; "ctrl c")]
    #[test_case(17, KeyEvent::CtrlQuit ; "ctrl q")]
    #[test_case(18, KeyEvent::CtrlRefresh ; "ctrl r")]
    #[test_case(19, KeyEvent::CtrlSave ; "ctrl s")]
    #[test_case(9, KeyEvent::Tab ; "tab")]
    #[test_case(10, KeyEvent::Enter ; "line feed")]
    #[test_case(13, KeyEvent::Enter ; "carriage return")]
    #[test_case(127, KeyEvent::Backspace ; "del")]
    #[test_case(0, KeyEvent::Idle ; "nul")]
    #[test_case(b'q', KeyEvent::Char('q') ; "printable")]
    #[test_case(b' ', KeyEvent::Char(' ') ; "space")]
    #[test_case(1, KeyEvent::Char('\x01') ; "unmapped control byte")]
    #[test_case(0xe9, KeyEvent::Char('\u{e9}') ; "high byte keeps its code point")]
    fn test_single_byte(byte: u8, expected: KeyEvent) {
        assert_eq!(decode_one(&[byte, b'x']), (expected, 1));
    }

    #[test]
    fn test_nothing_typed_is_idle() {
        assert_eq!(decode_one(&[]), (KeyEvent::Idle, 0));
    }

    // ==================== Escape Sequences ====================

    #[test_case(b"\x1b[A", KeyEvent::Up ; "up")]
    #[test_case(b"\x1b[B", KeyEvent::Down ; "down")]
    #[test_case(b"\x1b[C", KeyEvent::Right ; "right")]
    #[test_case(b"\x1b[D", KeyEvent::Left ; "left")]
    #[test_case(b"\x1b[H", KeyEvent::Home ; "home")]
    #[test_case(b"\x1b[F", KeyEvent::End ; "end")]
    #[test_case(b"\x1b[3~", KeyEvent::Delete ; "delete")]
    #[test_case(b"\x1b[5~", KeyEvent::PageUp ; "page up")]
    #[test_case(b"\x1b[6~", KeyEvent::PageDown ; "page down")]
    fn test_recognized_sequence_consumes_exactly_its_bytes(
        sequence: &[u8],
        expected: KeyEvent,
    ) {
        // Trailing byte proves the decoder stops at the documented length.
        let mut input = sequence.to_vec();
        input.push(b'z');
        assert_eq!(decode_one(&input), (expected, sequence.len()));
    }

    #[test]
    fn test_lone_escape_times_out() {
        assert_eq!(decode_one(b"\x1b"), (KeyEvent::Escape, 1));
    }

    #[test]
    fn test_escape_then_gap_then_bracket() {
        // A human pressing ESC, pausing for a tick, then typing `[A`.
        let mut source = ByteSourceMock::new(b"\x1b");
        source.push_timeout();
        source.push_bytes(b"[A");
        let mut decoder = KeyDecoder::new(source);
        assert_eq!(decoder.read_key(), KeyEvent::Escape);
        assert_eq!(decoder.read_key(), KeyEvent::Char('['));
        assert_eq!(decoder.read_key(), KeyEvent::Char('A'));
        assert_eq!(decoder.read_key(), KeyEvent::Idle);
    }

    #[test_case(b"\x1b[@" ; "unknown final byte")]
    #[test_case(b"\x1b[Z" ; "shift tab is not in the table")]
    #[test_case(b"\x1b[1" ; "unknown parameter")]
    #[test_case(b"\x1bO" ; "ss3 introducer")]
    #[test_case(b"\x1bx" ; "alt chord")]
    #[test_case(b"\x1b[" ; "truncated after bracket")]
    fn test_unrecognized_sequence_degrades_to_escape(sequence: &[u8]) {
        let (key, consumed) = decode_one(sequence);
        assert_eq!(key, KeyEvent::Escape);
        assert!(consumed <= sequence.len());
    }

    #[test]
    fn test_missing_tilde_still_emits_key() {
        assert_eq!(decode_one(b"\x1b[3"), (KeyEvent::Delete, 3));
    }

    #[test]
    fn test_stream_of_mixed_input() {
        let mut decoder = KeyDecoder::new(ByteSourceMock::new(b"a\x1b[Bb\x1b[6~\r\x03"));
        let keys: Vec<KeyEvent> = std::iter::repeat_with(|| decoder.read_key())
            .take_while(|key| !key.is_idle())
            .collect();
        assert_eq!(
            keys,
            vec![
                KeyEvent::Char('a'),
                KeyEvent::Down,
                KeyEvent::Char('b'),
                KeyEvent::PageDown,
                KeyEvent::Enter,
                KeyEvent::CtrlInterrupt,
            ]
        );
    }

    // ==================== State Machine ====================

    #[test]
    fn test_advance_never_stays_pending_on_timeout_past_escape() {
        for state in [
            DecodeState::Escape,
            DecodeState::Csi,
            DecodeState::CsiParam(KeyEvent::Delete),
        ] {
            assert!(matches!(advance(state, None), DecodeStep::Emit(_)));
        }
    }

    #[test]
    fn test_every_byte_after_bracket_terminates_within_one_more_read() {
        for byte in 0..=u8::MAX {
            match advance(DecodeState::Csi, Some(byte)) {
                DecodeStep::Emit(_) => {}
                DecodeStep::Pending(next) => {
                    assert!(matches!(next, DecodeState::CsiParam(_)));
                    assert!(matches!(advance(next, Some(byte)), DecodeStep::Emit(_)));
                }
            }
        }
    }
}
