// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Control flow signal for loops and threads.
///
/// A unified type for indicating whether a loop should continue processing or stop.
/// Used by:
/// - [`App::handle_key()`], to tell the [main event loop] whether to keep going.
/// - The [main event loop] itself, to describe the outcome of one pass.
///
/// [`App::handle_key()`]: crate::App::handle_key
/// [main event loop]: crate::EventLoop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Continuation {
    /// Continue to the next iteration.
    #[default]
    Continue,

    /// Stop processing and exit the loop.
    Stop,
}

impl Continuation {
    #[must_use]
    pub fn is_stop(self) -> bool { matches!(self, Continuation::Stop) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_continue() {
        assert_eq!(Continuation::default(), Continuation::Continue);
        assert!(!Continuation::Continue.is_stop());
        assert!(Continuation::Stop.is_stop());
    }
}
