// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) sequence generation.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>

use crate::{CSI_START, RgbValue, SGR_BG_RGB_PREFIX, SGR_FG_RGB_PREFIX};
use std::fmt::{Display, Formatter, Result};

const SGR: &str = "m";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Underline,
    Invert,
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

impl SgrCode {
    #[must_use]
    pub fn fg(color: RgbValue) -> Self {
        SgrCode::ForegroundRGB(color.red, color.green, color.blue)
    }

    #[must_use]
    pub fn bg(color: RgbValue) -> Self {
        SgrCode::BackgroundRGB(color.red, color.green, color.blue)
    }
}

impl Display for SgrCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(CSI_START)?;
        match *self {
            SgrCode::Reset => f.write_str("0")?,
            SgrCode::Bold => f.write_str("1")?,
            SgrCode::Dim => f.write_str("2")?,
            SgrCode::Underline => f.write_str("4")?,
            SgrCode::Invert => f.write_str("7")?,
            SgrCode::ForegroundRGB(r, g, b) => write!(f, "{SGR_FG_RGB_PREFIX};{r};{g};{b}")?,
            SgrCode::BackgroundRGB(r, g, b) => write!(f, "{SGR_BG_RGB_PREFIX};{r};{g};{b}")?,
        }
        f.write_str(SGR)
    }
}
