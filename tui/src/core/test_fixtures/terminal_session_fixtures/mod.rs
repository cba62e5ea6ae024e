// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod terminal_session_mock;

// Re-export.
pub use terminal_session_mock::*;
