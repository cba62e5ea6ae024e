// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod byte_source_mock;

// Re-export.
pub use byte_source_mock::*;
