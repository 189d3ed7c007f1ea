use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Color
///
/// 32-bit RGBA color packed as `0xRRGGBBAA`.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    #[must_use]
    pub const fn from_packed(rgba: u32) -> Self {
        Self(rgba)
    }

    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        let invalid = || Error::invalid_value(format!("invalid hex color: '{text}'"));

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

        match digits.len() {
            6 => Ok(Self((packed << 8) | 0xFF)),
            8 => Ok(Self(packed)),
            _ => Err(invalid()),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

///
/// TESTS
///
