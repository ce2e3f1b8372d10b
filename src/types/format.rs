//! Netpbm format tags.
//!
//! A format is the pair of a pixel kind (bitmap, gray, colour) and an
//! encoding (textual tokens or raw binary). The header's first line names
//! it either by magic number (`P1`..`P6`) or by its long name
//! (`bitmap-text`, `color-binary`, ...).

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{PnmError, Result};

/// What a single pixel holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PixelKind {
    Bitmap,
    Gray,
    Color,
}

impl PixelKind {
    /// Samples per pixel.
    pub const fn channels(self) -> usize {
        match self {
            PixelKind::Bitmap | PixelKind::Gray => 1,
            PixelKind::Color => 3,
        }
    }

    /// Whether the header carries a max value line.
    pub fn has_max(self) -> bool {
        !matches!(self, PixelKind::Bitmap)
    }
}

impl fmt::Display for PixelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelKind::Bitmap => write!(f, "bitmap"),
            PixelKind::Gray => write!(f, "gray"),
            PixelKind::Color => write!(f, "color"),
        }
    }
}

/// How pixel data is laid out after the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Whitespace-separated decimal tokens, one line per row.
    Text,
    /// Raw bytes (packed bits for bitmaps).
    Binary,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Text => write!(f, "text"),
            Encoding::Binary => write!(f, "binary"),
        }
    }
}

/// How the format tag was spelled in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagStyle {
    /// `P1` .. `P6`
    #[default]
    Magic,
    /// `bitmap-text` .. `color-binary`
    Named,
}

/// One of the six Netpbm variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Format {
    BitmapText,
    GrayText,
    ColorText,
    BitmapBinary,
    GrayBinary,
    ColorBinary,
}

impl Format {
    pub const ALL: [Format; 6] = [
        Format::BitmapText,
        Format::GrayText,
        Format::ColorText,
        Format::BitmapBinary,
        Format::GrayBinary,
        Format::ColorBinary,
    ];

    /// Build a format from its two components.
    pub fn new(kind: PixelKind, encoding: Encoding) -> Self {
        match (kind, encoding) {
            (PixelKind::Bitmap, Encoding::Text) => Format::BitmapText,
            (PixelKind::Gray, Encoding::Text) => Format::GrayText,
            (PixelKind::Color, Encoding::Text) => Format::ColorText,
            (PixelKind::Bitmap, Encoding::Binary) => Format::BitmapBinary,
            (PixelKind::Gray, Encoding::Binary) => Format::GrayBinary,
            (PixelKind::Color, Encoding::Binary) => Format::ColorBinary,
        }
    }

    pub fn kind(self) -> PixelKind {
        match self {
            Format::BitmapText | Format::BitmapBinary => PixelKind::Bitmap,
            Format::GrayText | Format::GrayBinary => PixelKind::Gray,
            Format::ColorText | Format::ColorBinary => PixelKind::Color,
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            Format::BitmapText | Format::GrayText | Format::ColorText => Encoding::Text,
            _ => Encoding::Binary,
        }
    }

    /// Same pixel kind, different encoding.
    pub fn with_encoding(self, encoding: Encoding) -> Self {
        Self::new(self.kind(), encoding)
    }

    /// The magic number, e.g. `P4`.
    pub fn magic(self) -> &'static str {
        match self {
            Format::BitmapText => "P1",
            Format::GrayText => "P2",
            Format::ColorText => "P3",
            Format::BitmapBinary => "P4",
            Format::GrayBinary => "P5",
            Format::ColorBinary => "P6",
        }
    }

    /// The long tag name, e.g. `bitmap-binary`.
    pub fn name(self) -> &'static str {
        match self {
            Format::BitmapText => "bitmap-text",
            Format::GrayText => "gray-text",
            Format::ColorText => "color-text",
            Format::BitmapBinary => "bitmap-binary",
            Format::GrayBinary => "gray-binary",
            Format::ColorBinary => "color-binary",
        }
    }

    /// Header tag in the given spelling.
    pub fn tag(self, style: TagStyle) -> &'static str {
        match style {
            TagStyle::Magic => self.magic(),
            TagStyle::Named => self.name(),
        }
    }

    /// Recognize a header tag, returning the format and how it was spelled.
    ///
    /// Matching is exact: `p1` or `P7` are not tags.
    pub fn parse_tag(tag: &str) -> Option<(Format, TagStyle)> {
        Self::ALL.iter().find_map(|&format| {
            if tag == format.magic() {
                Some((format, TagStyle::Magic))
            } else if tag == format.name() {
                Some((format, TagStyle::Named))
            } else {
                None
            }
        })
    }
}

impl FromStr for Format {
    type Err = PnmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_tag(s.trim())
            .map(|(format, _)| format)
            .ok_or_else(|| PnmError::UnsupportedFormat {
                message: format!("'{}' is not a Netpbm format tag", s.trim()),
            })
    }
}

impl TryFrom<String> for Format {
    type Error = PnmError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.magic())
    }
}
