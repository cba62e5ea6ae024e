// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach. Palette names are used qualified, eg: `palette::BG`.
pub mod palette;
pub mod rgb_value;

// Re-export.
pub use rgb_value::*;
