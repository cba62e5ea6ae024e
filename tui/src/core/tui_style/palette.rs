// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The named colors of the dark panel theme.
//!
//! | Name         | RGB            | Used for                               |
//! | :----------- | :------------- | :------------------------------------- |
//! | `BG`         | 10, 10, 12     | screen background                      |
//! | `PANEL`      | 20, 20, 24     | header, footer, side panels            |
//! | `CARD`       | 28, 28, 32     | content cards                          |
//! | `INPUT`      | 38, 38, 44     | editable fields, bar tracks, off state |
//! | `BORDER`     | 50, 50, 58     | box outlines, rules                    |
//! | `ACCENT`     | 229, 24, 45    | selection, on state, filled bars       |
//! | `ACCENT_DIM` | 140, 16, 28    | inactive selection                     |
//! | `TEXT`       | 228, 228, 231  | body text                              |
//! | `TEXT_DIM`   | 113, 113, 122  | labels                                 |
//! | `TEXT_MUTED` | 63, 63, 70     | hints                                  |

use crate::RgbValue;

pub const BG: RgbValue = RgbValue::from_u8(10, 10, 12);
pub const PANEL: RgbValue = RgbValue::from_u8(20, 20, 24);
pub const CARD: RgbValue = RgbValue::from_u8(28, 28, 32);
pub const INPUT: RgbValue = RgbValue::from_u8(38, 38, 44);
pub const BORDER: RgbValue = RgbValue::from_u8(50, 50, 58);
pub const ACCENT: RgbValue = RgbValue::from_u8(229, 24, 45);
pub const ACCENT_DIM: RgbValue = RgbValue::from_u8(140, 16, 28);
pub const TEXT: RgbValue = RgbValue::from_u8(228, 228, 231);
pub const TEXT_DIM: RgbValue = RgbValue::from_u8(113, 113, 122);
pub const TEXT_MUTED: RgbValue = RgbValue::from_u8(63, 63, 70);

// Status.
pub const SUCCESS: RgbValue = RgbValue::from_u8(34, 197, 94);
pub const WARNING: RgbValue = RgbValue::from_u8(245, 158, 11);
pub const ERROR: RgbValue = RgbValue::from_u8(239, 68, 68);

// Profile accents.
pub const PERF: RgbValue = RgbValue::from_u8(239, 68, 68);
pub const BALANCED: RgbValue = RgbValue::from_u8(59, 130, 246);
pub const QUIET: RgbValue = RgbValue::from_u8(34, 197, 94);

pub const AURA: RgbValue = RgbValue::from_u8(168, 85, 247);
pub const WHITE: RgbValue = RgbValue::from_u8(255, 255, 255);
