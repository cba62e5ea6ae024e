// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words sigterm termios

//! `SIGTERM` delivered to a process in raw mode: the terminal is restored and the
//! process exits with status 0, without any help from the event loop.
//!
//! The test binary runs twice. The parent opens a PTY and re-runs this test as a child
//! with the PTY slave as its stdin and stdout. The child acquires raw mode, installs the
//! signal routing, announces itself, and waits to be killed.

use rogdeck_tui::{INTERRUPT_EXIT_CODE, OutputDevice, RawModeController, SignalRouting,
                  TerminalSession, open_test_pty};
use rustix::{process::{Pid, Signal, kill_process},
             termios::{self, SpecialCodeIndex, Termios}};
use std::{fs::File,
          io::{Read, Write},
          process::{Command, Stdio},
          sync::{Arc, atomic::AtomicBool, mpsc},
          time::{Duration, Instant}};

const CHILD_ENV_VAR: &str = "ROGDECK_INTERRUPT_TEST_CHILD";
const READY_MARKER: &str = "CHILD_READY";
const RESTORE_SEQUENCE: &str = "\x1b[?25h\x1b[?1049l";
const TIMEOUT: Duration = Duration::from_secs(10);

#[test]
fn test_sigterm_restores_terminal_and_exits_zero() {
    if std::env::var(CHILD_ENV_VAR).is_ok() {
        run_child();
    }

    let pty = open_test_pty().unwrap();
    let before = termios::tcgetattr(&pty.slave).unwrap();

    let mut child = Command::new(std::env::current_exe().unwrap())
        .env(CHILD_ENV_VAR, "1")
        .args([
            "--exact",
            "test_sigterm_restores_terminal_and_exits_zero",
            "--nocapture",
            "--test-threads",
            "1",
        ])
        .stdin(Stdio::from(pty.slave.try_clone().unwrap()))
        .stdout(Stdio::from(pty.slave.try_clone().unwrap()))
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let output = spawn_master_reader(File::from(pty.master.try_clone().unwrap()));
    let mut seen = String::new();
    assert!(
        read_until(&output, &mut seen, READY_MARKER),
        "child never became ready: {seen:?}"
    );
    // Raw mode is active on the shared slave.
    let during = termios::tcgetattr(&pty.slave).unwrap();
    assert_eq!(during.special_codes[SpecialCodeIndex::VTIME], 1);

    kill_process(Pid::from_child(&child), Signal::TERM).unwrap();

    let deadline = Instant::now() + TIMEOUT;
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            panic!("child did not exit after SIGTERM");
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    assert_eq!(status.code(), Some(INTERRUPT_EXIT_CODE));
    assert!(
        read_until(&output, &mut seen, RESTORE_SEQUENCE),
        "restore sequence missing: {seen:?}"
    );

    let after = termios::tcgetattr(&pty.slave).unwrap();
    assert_eq!(fingerprint(&before), fingerprint(&after));
}

/// Never returns: either the signal path exits the process, or the timeout does.
fn run_child() -> ! {
    let controller =
        Arc::new(RawModeController::try_new(OutputDevice::new_stdout()).unwrap());
    controller.acquire().unwrap();
    let _routing =
        SignalRouting::try_install(Arc::clone(&controller), Arc::new(AtomicBool::new(false)))
            .unwrap();

    let mut stdout = std::io::stdout();
    stdout.write_all(READY_MARKER.as_bytes()).unwrap();
    stdout.flush().unwrap();

    std::thread::sleep(TIMEOUT);
    controller.release();
    std::process::exit(2);
}

/// The master side blocks on read until the child writes, so read it on a thread.
fn spawn_master_reader(mut master: File) -> mpsc::Receiver<Vec<u8>> {
    let (sender, receiver) = mpsc::channel();
    std::thread::spawn(move || {
        let mut buf = [0_u8; 1024];
        loop {
            match master.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(count) => {
                    if sender.send(buf[..count].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });
    receiver
}

fn read_until(output: &mpsc::Receiver<Vec<u8>>, seen: &mut String, needle: &str) -> bool {
    let deadline = Instant::now() + TIMEOUT;
    while !seen.contains(needle) {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match output.recv_timeout(remaining) {
            Ok(chunk) => seen.push_str(&String::from_utf8_lossy(&chunk)),
            Err(_) => return false,
        }
    }
    true
}

fn fingerprint(t: &Termios) -> (String, Vec<u8>) {
    let flags = format!(
        "{:?} {:?} {:?} {:?}",
        t.input_modes, t.output_modes, t.control_modes, t.local_modes
    );
    let codes = [
        SpecialCodeIndex::VMIN,
        SpecialCodeIndex::VTIME,
        SpecialCodeIndex::VINTR,
        SpecialCodeIndex::VEOF,
    ]
    .into_iter()
    .map(|index| t.special_codes[index])
    .collect();
    (flags, codes)
}
