// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drive the event loop from raw bytes to flushed frames, without a tty.

use pretty_assertions::assert_eq;
use rogdeck_tui::{App, ByteSourceMock, Continuation, EventLoop, FrameCompositor,
                  KeyEvent, OutputDevice, OutputDeviceExt, RawModeGuard, Size,
                  TerminalSession, TerminalSessionMock, palette};
use std::sync::Arc;

#[derive(Debug, Default)]
struct KeyEcho {
    last_key: Option<KeyEvent>,
    seen: Vec<KeyEvent>,
}

impl App for KeyEcho {
    fn handle_key(&mut self, key: KeyEvent) -> Continuation {
        self.seen.push(key);
        self.last_key = Some(key);
        match key {
            KeyEvent::CtrlInterrupt | KeyEvent::CtrlQuit => Continuation::Stop,
            _ => Continuation::Continue,
        }
    }

    fn render(&mut self, frame: &mut FrameCompositor, size: Size) {
        frame.fill_rect(0, 0, size.col_width, 1, palette::PANEL);
        let label = match self.last_key {
            Some(key) => format!("last key: {key}"),
            None => "last key: none".to_string(),
        };
        frame.text(0, 0, palette::TEXT, &label);
    }

    fn has_transient_status(&self) -> bool { false }
}

#[test]
fn test_arrow_then_interrupt_stops_loop() {
    let session = Arc::new(TerminalSessionMock::default());
    let (output_device, stdout_mock) = OutputDevice::new_mock();
    let source = ByteSourceMock::new(&[27, b'[', b'A', 3]);
    let mut app = KeyEcho::default();

    {
        let _guard = RawModeGuard::new(&*session).unwrap();
        let mut event_loop = EventLoop::new(Arc::clone(&session), source, output_device);
        event_loop.run(&mut app).unwrap();
    }

    assert_eq!(app.seen, vec![KeyEvent::Up, KeyEvent::CtrlInterrupt]);

    // Initial frame and the frame after Up. Nothing is drawn after the stop.
    let frames = stdout_mock.get_transmissions_as_strings();
    assert_eq!(frames.len(), 2);
    let last = strip_ansi_escapes::strip_str(&frames[1]);
    assert!(last.contains(&format!("last key: {}", KeyEvent::Up)));

    // Every way out of the loop restores the terminal.
    assert!(!session.is_raw());
    assert_eq!(session.acquire_count(), 1);
    assert_eq!(session.release_count(), 1);
}

#[test]
fn test_frames_are_single_transmissions_wrapped_in_cursor_directives() {
    let session = Arc::new(TerminalSessionMock::default());
    let (output_device, stdout_mock) = OutputDevice::new_mock();
    let source = ByteSourceMock::new(b"\x1b[5~\x11");
    let mut app = KeyEcho::default();

    EventLoop::new(session, source, output_device)
        .run(&mut app)
        .unwrap();

    assert_eq!(app.seen, vec![KeyEvent::PageUp, KeyEvent::CtrlQuit]);
    for frame in stdout_mock.get_transmissions_as_strings() {
        assert!(frame.starts_with("\x1b[?25l\x1b[H"));
        assert!(frame.ends_with("\x1b[?25h"));
    }
}
