//! Rasterizer and PNG bridge.
//!
//! Drawing primitives are inherent methods on every
//! [`Raster`](crate::types::Raster), so a bitmap takes `bool` ink, a gray
//! map takes `u8` ink and a colour map takes [`Colour`](crate::types::Colour)
//! ink. All of them write through [`Raster::plot`](crate::types::Raster::plot):
//! off-canvas pixels are dropped and values are clamped to the raster's max.

mod circle;
mod fill;
mod koch;
mod line;
mod png;

pub use png::{read_png, scale_pixels, write_png};
