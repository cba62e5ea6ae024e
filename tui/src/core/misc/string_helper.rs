// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fit text into a fixed number of terminal columns.
//!
//! Everything here measures *display width* over grapheme clusters, not bytes or
//! `char`s: `"日本"` is 4 columns wide and `"👍🏽"` is one cluster. A cluster is never
//! split, so truncation can never cut a multi-byte glyph in half. When a wide glyph does
//! not fit in the last column or two, it is dropped whole and the result comes up short;
//! [`pad()`] fills that gap with spaces.

use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const ELLIPSIS_GLYPH: &str = "…";
pub const SPACER_GLYPH: &str = " ";

/// Targets this narrow are hard-cut: an ellipsis would eat most of the room.
const MIN_WIDTH_FOR_ELLIPSIS: usize = 4;

/// Number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize { UnicodeWidthStr::width(text) }

/// Repeat `text` `count` times. Zero yields an empty string.
#[must_use]
pub fn repeat(text: &str, count: usize) -> String { text.repeat(count) }

/// Longest prefix of whole grapheme clusters that fits in `max_width` columns.
fn take_prefix(text: &str, max_width: usize) -> (&str, usize) {
    let mut end = 0;
    let mut width = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let grapheme_width = display_width(grapheme);
        if width + grapheme_width > max_width {
            break;
        }
        width += grapheme_width;
        end = offset + grapheme.len();
    }
    (&text[..end], width)
}

/// Cut `text` to at most `width` columns. If it has to be cut, the last visible
/// column becomes [`ELLIPSIS_GLYPH`] (for widths under 4 it is hard-cut instead).
/// Text that already fits, including text exactly `width` wide, is returned as is.
#[must_use]
pub fn truncate(text: &str, width: usize) -> Cow<'_, str> {
    if display_width(text) <= width {
        return Cow::Borrowed(text);
    }
    if width < MIN_WIDTH_FOR_ELLIPSIS {
        let (prefix, _) = take_prefix(text, width);
        return Cow::Borrowed(prefix);
    }
    let (prefix, _) = take_prefix(text, width - display_width(ELLIPSIS_GLYPH));
    Cow::Owned(format!("{prefix}{ELLIPSIS_GLYPH}"))
}

/// Fit `text` into exactly `width` columns: [`truncate()`] it, then right-pad with
/// spaces.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let gap = width.saturating_sub(display_width(&truncated));
    format!("{truncated}{}", repeat(SPACER_GLYPH, gap))
}

/// Center `text` in exactly `width` columns. The odd leftover space goes to the right.
/// Text that does not fit is hard-cut (no ellipsis).
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let (fitted, fitted_width) = take_prefix(text, width);
    let gap = width - fitted_width;
    let left = gap / 2;
    let right = gap - left;
    format!(
        "{}{fitted}{}",
        repeat(SPACER_GLYPH, left),
        repeat(SPACER_GLYPH, right)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_truncate_over_long_ascii() {
        let truncated = truncate("Hello, World", 6);
        assert_eq!(truncated, "Hello…");
        assert_eq!(display_width(&truncated), 6);
        assert_eq!(truncated.chars().count(), 6);
    }

    #[test]
    fn test_truncate_exact_width_is_untouched() {
        assert!(matches!(truncate("abcdef", 6), Cow::Borrowed("abcdef")));
    }

    #[test_case("abcdef", 3, "abc" ; "hard cut at three")]
    #[test_case("abcdef", 1, "a" ; "hard cut at one")]
    #[test_case("abcdef", 0, "" ; "zero width")]
    fn test_truncate_narrow_target_has_no_ellipsis(text: &str, width: usize, expected: &str) {
        assert_eq!(truncate(text, width), expected);
    }

    #[test]
    fn test_truncate_never_splits_wide_glyph() {
        // 5 columns available before the ellipsis: two 2-wide glyphs fit, the third
        // does not.
        let truncated = truncate("日本語テキスト", 6);
        assert_eq!(truncated, "日本…");
        assert_eq!(display_width(&truncated), 5);
    }

    #[test]
    fn test_truncate_keeps_grapheme_clusters_whole() {
        let text = "e\u{301}e\u{301}e\u{301}e\u{301}e\u{301}";
        let truncated = truncate(text, 4);
        assert_eq!(truncated, "e\u{301}e\u{301}e\u{301}…");
    }

    #[test_case("Hi", 6, "Hi    " ; "short is right padded")]
    #[test_case("abcdef", 6, "abcdef" ; "exact is unchanged")]
    #[test_case("Hello, World", 6, "Hello…" ; "long is truncated")]
    #[test_case("日本語テキスト", 6, "日本… " ; "wide glyph gap is padded")]
    fn test_pad(text: &str, width: usize, expected: &str) {
        let padded = pad(text, width);
        assert_eq!(padded, expected);
        assert_eq!(display_width(&padded), width);
    }

    #[test_case("ab", 6, "  ab  " ; "even split")]
    #[test_case("abc", 6, " abc  " ; "extra space on the right")]
    #[test_case("abcdefgh", 4, "abcd" ; "hard cut")]
    #[test_case("", 3, "   " ; "empty")]
    fn test_center(text: &str, width: usize, expected: &str) {
        assert_eq!(center(text, width), expected);
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat("─", 3), "───");
        assert_eq!(repeat("─", 0), "");
    }
}
