// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Composite widgets. Each one is a fixed sequence of compositor primitives, so like the
//! primitives they only append to the frame buffer.

use crate::{FrameCompositor, RgbValue, palette, repeat};

pub const BOX_TOP_LEFT: &str = "┌";
pub const BOX_TOP_RIGHT: &str = "┐";
pub const BOX_BOTTOM_LEFT: &str = "└";
pub const BOX_BOTTOM_RIGHT: &str = "┘";
pub const BOX_HORIZONTAL: &str = "─";
pub const BOX_VERTICAL: &str = "│";

pub const TOGGLE_ON_LABEL: &str = " ◉ ON  ";
pub const TOGGLE_OFF_LABEL: &str = " ○ OFF ";

/// Number of filled cells for a bar `width` cells wide at `fraction` (0.0 to 1.0).
/// Rounds down, and clamps to `0..=width` so out of range fractions (and `NaN`) are
/// safe.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bar_filled_cells(width: u16, fraction: f64) -> u16 {
    let filled = (fraction * f64::from(width)).floor();
    if filled.is_nan() || filled <= 0.0 {
        return 0;
    }
    if filled >= f64::from(width) {
        return width;
    }
    // In range 1..width after the checks above.
    filled as u16
}

impl FrameCompositor {
    /// Single-line outline. Boxes smaller than 2x2 have no room for corners and are
    /// skipped. Rows and the right edge past the last addressable cell are not drawn.
    pub fn draw_box(&mut self, x: u16, y: u16, width: u16, height: u16, border: RgbValue) {
        if width < 2 || height < 2 {
            return;
        }
        let edge = repeat(BOX_HORIZONTAL, usize::from(width - 2));
        let right = x.checked_add(width - 1);

        self.fg(border);
        self.move_to(x, y);
        self.write(BOX_TOP_LEFT);
        self.write(&edge);
        self.write(BOX_TOP_RIGHT);
        for row in 1..height - 1 {
            let Some(row_y) = y.checked_add(row) else {
                return;
            };
            self.move_to(x, row_y);
            self.write(BOX_VERTICAL);
            if let Some(right) = right {
                self.move_to(right, row_y);
                self.write(BOX_VERTICAL);
            }
        }
        let Some(bottom) = y.checked_add(height - 1) else {
            return;
        };
        self.move_to(x, bottom);
        self.write(BOX_BOTTOM_LEFT);
        self.write(&edge);
        self.write(BOX_BOTTOM_RIGHT);
    }

    /// Paint a rectangle with a background color. The background is left set. Rows
    /// past the last addressable row are not painted.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, bg: RgbValue) {
        self.bg(bg);
        let blank = repeat(" ", usize::from(width));
        for row_y in (0..height).map_while(|row| y.checked_add(row)) {
            self.move_to(x, row_y);
            self.write(&blank);
        }
    }

    /// Horizontal rule.
    pub fn hline(&mut self, x: u16, y: u16, width: u16, color: RgbValue) {
        self.fg(color);
        self.move_to(x, y);
        self.write(&repeat(BOX_HORIZONTAL, usize::from(width)));
    }

    /// Text in `fg`, over whatever background is already in the cells.
    pub fn text(&mut self, x: u16, y: u16, fg: RgbValue, text: &str) {
        self.reset_style();
        self.fg(fg);
        self.move_to(x, y);
        self.write(text);
    }

    pub fn text_bg(&mut self, x: u16, y: u16, fg: RgbValue, bg: RgbValue, text: &str) {
        self.reset_style();
        self.fg(fg);
        self.bg(bg);
        self.move_to(x, y);
        self.write(text);
    }

    pub fn text_bold(&mut self, x: u16, y: u16, fg: RgbValue, text: &str) {
        self.reset_style();
        self.bold();
        self.fg(fg);
        self.move_to(x, y);
        self.write(text);
    }

    /// Percentage bar: [`bar_filled_cells()`] cells in `fill`, the rest of the track in
    /// `track`.
    pub fn draw_bar(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        fraction: f64,
        fill: RgbValue,
        track: RgbValue,
    ) {
        let filled = bar_filled_cells(width, fraction);
        self.move_to(x, y);
        self.bg(fill);
        self.write(&repeat(" ", usize::from(filled)));
        self.bg(track);
        self.write(&repeat(" ", usize::from(width - filled)));
        self.reset_style();
    }

    /// Selected: ` label ` in bold white on `accent`. Otherwise: `[label]` with dim
    /// text and border colored brackets.
    pub fn draw_button(
        &mut self,
        x: u16,
        y: u16,
        label: &str,
        selected: bool,
        accent: RgbValue,
    ) {
        self.reset_style();
        if selected {
            self.bg(accent);
            self.fg(palette::WHITE);
            self.bold();
            self.move_to(x, y);
            self.write(" ");
            self.write(label);
            self.write(" ");
        } else {
            self.fg(palette::BORDER);
            self.move_to(x, y);
            self.write("[");
            self.fg(palette::TEXT_DIM);
            self.write(label);
            self.fg(palette::BORDER);
            self.write("]");
        }
    }

    /// On/off switch, always 7 cells wide.
    pub fn draw_toggle(&mut self, x: u16, y: u16, on: bool) {
        self.reset_style();
        if on {
            self.bg(palette::ACCENT);
            self.fg(palette::WHITE);
            self.move_to(x, y);
            self.write(TOGGLE_ON_LABEL);
        } else {
            self.bg(palette::INPUT);
            self.fg(palette::TEXT_DIM);
            self.move_to(x, y);
            self.write(TOGGLE_OFF_LABEL);
        }
        self.reset_style();
    }
}
