//! Colour pixel type and hex parsing.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{PnmError, Result};

/// An RGB colour sample, each channel in `[0, max]` of its raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White (at the common max of 255).
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` (expanded to 6 digits) and `#RRGGBB`. The leading
    /// `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                let r = parse_hex_byte(&hex[0..1])?;
                let g = parse_hex_byte(&hex[1..2])?;
                let b = parse_hex_byte(&hex[2..3])?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Channels as an array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Integer average of the three channels, truncated.
    pub fn average(self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
}

impl From<[u8; 3]> for Colour {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl FromStr for Colour {
    type Err = PnmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = PnmError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn invalid_hex(s: &str) -> PnmError {
    PnmError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}

/// Parse one or two hex digits.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| PnmError::Parse {
        message: format!("Invalid hex digits: {}", s),
        help: None,
    })
}
