// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod app;
pub mod main_event_loop;
pub mod signal_routing;

// Re-export.
pub use app::*;
pub use main_event_loop::*;
pub use signal_routing::*;
