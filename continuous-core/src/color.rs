//! CSS colour parsing for raster surfaces.

use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// An RGBA colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel (255 = opaque).
    pub alpha: u8,
}

impl Color {
    /// Fully transparent black, what a cleared 2D canvas holds.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Create a colour from its channels.
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse a CSS colour: named colours, `#rgb`, `#rrggbb`, `rgb()` and
    /// `rgba()`. Names are matched case-insensitively (`"Red"` works).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidColor`] if the string is not a colour.
    pub fn parse(value: &str) -> CoreResult<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let parsed = svgtypes::Color::from_str(&normalized)
            .map_err(|e| CoreError::InvalidColor(format!("{value:?}: {e}")))?;
        Ok(Self::rgba(
            parsed.red,
            parsed.green,
            parsed.blue,
            parsed.alpha,
        ))
    }

    /// Channels as an `[r, g, b, a]` array.
    #[must_use]
    pub fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl From<[u8; 4]> for Color {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::rgba(red, green, blue, alpha)
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}
