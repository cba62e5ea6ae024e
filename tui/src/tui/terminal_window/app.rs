// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Continuation, FrameCompositor, KeyEvent, Size};

/// The UI state that plugs into the [`EventLoop`].
///
/// The loop owns the terminal. Your app owns everything else: which panel is active,
/// what is being edited, what to draw. It sees exactly two things from the terminal:
/// one decoded [`KeyEvent`] per loop pass, and a [`FrameCompositor`] to draw into.
///
/// [`EventLoop`]: crate::EventLoop
pub trait App {
    /// Update state in response to a key. Return [`Continuation::Stop`] to end the loop;
    /// no further render happens after that.
    ///
    /// Never called with [`KeyEvent::Idle`], see [`Self::on_tick()`].
    fn handle_key(&mut self, key: KeyEvent) -> Continuation;

    /// Draw the whole screen. The frame buffer is empty on entry and flushed by the
    /// loop when this returns. `size` may differ from the previous call.
    fn render(&mut self, frame: &mut FrameCompositor, size: Size);

    /// Whether something on screen changes with time alone (eg: a status line that
    /// expires). The loop only redraws on an idle tick when this is true, so a static
    /// screen is not redrawn ten times a second.
    fn has_transient_status(&self) -> bool;

    /// Called once per idle tick (no key within 100ms), after
    /// [`Self::has_transient_status()`] is sampled and before the optional redraw. If
    /// this expires the status, the redraw on this same tick erases it.
    fn on_tick(&mut self) {}
}
