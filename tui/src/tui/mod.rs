// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The upper half of the crate: the [`FrameCompositor`] your app draws into, and the
//! [`EventLoop`] that ties it to the terminal and the keyboard.

// Attach sources.
pub mod frame_compositor;
pub mod terminal_window;

// Re-export.
pub use frame_compositor::*;
pub use terminal_window::*;
