// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! This is the only color representation the compositor emits. Terminals without
//! truecolor support are not degraded to ANSI 256.

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbValue {
    /// `0xRRGGBB`. The top byte is ignored.
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl Default for RgbValue {
    fn default() -> Self { Self::from_u8(255, 255, 255) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rgb_from_hex_u32() {
        assert_eq!(RgbValue::from(0x00e5_182d), RgbValue::from_u8(229, 24, 45));
        assert_eq!(RgbValue::from(0xff00_0000), RgbValue::from_u8(0, 0, 0));
    }

    #[test]
    fn test_rgb_from_tuple() {
        assert_eq!(RgbValue::from((1, 2, 3)), RgbValue::from_u8(1, 2, 3));
    }
}
