use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A packed ARGB color, `0xAARRGGBB`.
///
/// The all-zero value doubles as "fully transparent, draw nothing" in the
/// renderer, matching the mask-skip behavior of the overlay.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Fully opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Whether filling with this color is a no-op.
    pub const fn is_transparent(self) -> bool {
        self.0 == 0
    }

    /// Same RGB with near-zero alpha.
    ///
    /// Used as the far endpoint of the laser gradient so the indicator's
    /// leading edge fades out instead of cutting off.
    pub const fn fade_to_transparent(self) -> Color {
        Color((self.0 & 0x00FF_FFFF) | 0x0100_0000)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Errors that can occur when parsing a color literal.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("invalid color literal '{0}': expected #RRGGBB or #AARRGGBB")]
    InvalidFormat(String),
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::InvalidFormat(s.to_string()))?;
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ParseColorError::InvalidFormat(s.to_string()))?;
        match hex.len() {
            6 => Ok(Color(0xFF00_0000 | value)),
            8 => Ok(Color(value)),
            _ => Err(ParseColorError::InvalidFormat(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let literal = String::deserialize(deserializer)?;
        literal.parse().map_err(serde::de::Error::custom)
    }
}
