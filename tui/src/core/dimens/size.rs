// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Terminal dimensions in cells.
///
/// Values are always usable for layout: the constructors that take raw OS values apply
/// the floor rule in [`Size::clamped()`]. Consumers must tolerate the size changing
/// between any two frames (see [`EventLoop`]).
///
/// [`EventLoop`]: crate::EventLoop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub col_width: u16,
    pub row_height: u16,
}

impl Size {
    pub const MIN_COL_WIDTH: u16 = 40;
    pub const MIN_ROW_HEIGHT: u16 = 10;
    pub const DEFAULT: Size = Size {
        col_width: 80,
        row_height: 24,
    };

    /// Apply the floor rule per axis. A width below [`Self::MIN_COL_WIDTH`] is replaced
    /// with the default width (80), a height below [`Self::MIN_ROW_HEIGHT`] with the
    /// default height (24). A degenerate `0 x 0` report therefore becomes `80 x 24`.
    #[must_use]
    pub const fn clamped(col_width: u16, row_height: u16) -> Self {
        Self {
            col_width: if col_width < Self::MIN_COL_WIDTH {
                Self::DEFAULT.col_width
            } else {
                col_width
            },
            row_height: if row_height < Self::MIN_ROW_HEIGHT {
                Self::DEFAULT.row_height
            } else {
                row_height
            },
        }
    }
}

impl Default for Size {
    fn default() -> Self { Self::DEFAULT }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[width:{}, height:{}]", self.col_width, self.row_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, 0, 80, 24 ; "degenerate report")]
    #[test_case(39, 9, 80, 24 ; "just below floor")]
    #[test_case(40, 10, 40, 10 ; "exactly at floor")]
    #[test_case(120, 5, 120, 24 ; "only height clamped")]
    #[test_case(12, 50, 80, 50 ; "only width clamped")]
    #[test_case(300, 90, 300, 90 ; "large terminal")]
    fn test_clamped(w: u16, h: u16, expected_w: u16, expected_h: u16) {
        let size = Size::clamped(w, h);
        assert_eq!(size.col_width, expected_w);
        assert_eq!(size.row_height, expected_h);
        assert!(size.col_width >= Size::MIN_COL_WIDTH);
        assert!(size.row_height >= Size::MIN_ROW_HEIGHT);
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(Size::default(), Size::DEFAULT);
        assert_eq!(Size::DEFAULT.to_string(), "[width:80, height:24]");
    }
}
