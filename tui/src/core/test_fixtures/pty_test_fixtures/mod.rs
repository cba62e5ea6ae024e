// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod test_pty;

// Re-export.
pub use test_pty::*;
