// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod string_helper;

// Re-export.
pub use string_helper::*;
