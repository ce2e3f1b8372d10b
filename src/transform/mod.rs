//! Transforms applied to decoded rasters.
//!
//! Orientation transforms (`invert`, `flip`, `flop`, `rotate_cw`) are
//! inherent methods on every [`Raster`](crate::types::Raster). Depth
//! conversions live on the concrete raster types (`Pixmap::to_gray`,
//! `Graymap::to_bitmap`, ...). This module adds the kind-erased versions
//! used by the CLI.

mod convert;
mod orient;

use std::fmt;

use clap::ValueEnum;
use log::debug;

use crate::codec::AnyRaster;
use crate::types::PixelKind;

/// An orientation or value transform that keeps the pixel kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Op {
    /// Replace every value with max - value
    Invert,
    /// Mirror left to right
    Flip,
    /// Mirror top to bottom
    Flop,
    /// Rotate 90° clockwise
    Rotate,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Invert => write!(f, "invert"),
            Op::Flip => write!(f, "flip"),
            Op::Flop => write!(f, "flop"),
            Op::Rotate => write!(f, "rotate"),
        }
    }
}

impl AnyRaster {
    /// Apply one transform in place.
    pub fn apply(&mut self, op: Op) {
        debug!("applying {} to {} image", op, self.format());
        match self {
            AnyRaster::Bitmap(r) => apply(r, op),
            AnyRaster::Graymap(r) => apply(r, op),
            AnyRaster::Pixmap(r) => apply(r, op),
        }
    }

    /// Reduce (or promote) to the given pixel kind.
    ///
    /// Colour → gray averages channels; gray/colour → bitmap thresholds at
    /// `max / 2`; gray → colour copies the value into every channel.
    /// Bitmaps cannot be promoted and are returned unchanged, as is any
    /// image already of the requested kind.
    pub fn convert(self, kind: PixelKind) -> AnyRaster {
        match (self, kind) {
            (AnyRaster::Pixmap(r), PixelKind::Gray) => r.to_gray().into(),
            (AnyRaster::Pixmap(r), PixelKind::Bitmap) => r.to_bitmap().into(),
            (AnyRaster::Graymap(r), PixelKind::Bitmap) => r.to_bitmap().into(),
            (AnyRaster::Graymap(r), PixelKind::Color) => r.to_colour().into(),
            (image, _) => image,
        }
    }
}

fn apply<P: crate::types::Pixel>(raster: &mut crate::types::Raster<P>, op: Op) {
    match op {
        Op::Invert => raster.invert(),
        Op::Flip => raster.flip(),
        Op::Flop => raster.flop(),
        Op::Rotate => raster.rotate_cw(),
    }
}
