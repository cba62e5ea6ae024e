// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The Frame Compositor: build a whole screen in memory, then put it on the terminal
//! in one write.
//!
//! - [`frame_compositor_impl`]: the buffer, the style primitives, and [`flush()`].
//! - [`draw_primitives`]: boxes, fills, rules, bars, buttons, and toggles layered on the
//!   primitives.
//!
//! [`flush()`]: crate::FrameCompositor::flush

// Attach.
pub mod draw_primitives;
pub mod frame_compositor_impl;

// Re-export.
pub use draw_primitives::*;
pub use frame_compositor_impl::*;
