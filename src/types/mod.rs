//! Core domain types for pnmkit.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Format` - the six Netpbm variants and their header tags
//! - `Pixel` - the capability trait implemented by `bool`, `u8` and `Colour`
//! - `Raster` - the generic pixel grid (`Bitmap`, `Graymap`, `Pixmap`)
//! - `Point` - integer drawing coordinates

mod colour;
mod format;
mod pixel;
mod point;
mod raster;

pub use colour::Colour;
pub use format::{Encoding, Format, PixelKind, TagStyle};
pub use pixel::Pixel;
pub use point::Point;
pub use raster::{Bitmap, Graymap, Pixmap, Raster, DEFAULT_MAX};
