//! Hex color parsing for scene configs.
//!
//! Configs carry colors as `#rrggbb` strings so presets read like the page
//! stylesheet; the scene stores them as sRGB floats in [0, 1].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red, green, blue components.
    pub rgb: [f32; 3],
}

impl Color {
    /// Brand green used for the helix, particles and most capsules.
    pub const BRAND_GREEN: Self = Self::from_bytes(0x00, 0xc8, 0x53);
    /// Pale mint used for glass orbs.
    pub const MINT: Self = Self::from_bytes(0xa7, 0xf3, 0xd0);

    /// Build a color from 8-bit channels.
    #[must_use]
    pub const fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0],
        }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ConfigError::InvalidColor(hex.to_owned()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ConfigError::InvalidColor(hex.to_owned()))
        };
        Ok(Self::from_bytes(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// RGBA with the given opacity, for GPU instance data.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> [f32; 4] {
        [self.rgb[0], self.rgb[1], self.rgb[2], alpha]
    }

    fn to_bytes(self) -> [u8; 3] {
        self.rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BRAND_GREEN
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_bytes();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
