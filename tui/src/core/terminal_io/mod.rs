// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod output_device;
pub mod terminal_error;

// Re-export.
pub use output_device::*;
pub use terminal_error::*;
