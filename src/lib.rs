//! pnmkit - Netpbm image toolkit
//!
//! Reads and writes the six Netpbm formats (bitmap, gray and colour, each
//! textual or binary), transforms decoded rasters, and draws primitives on
//! them.

pub mod cli;
pub mod codec;
pub mod error;
pub mod output;
pub mod render;
pub mod scene;
pub mod transform;
pub mod types;

pub use codec::{decode, decode_as, encode, read_file, read_file_as, write_file, write_to, AnyRaster};
pub use error::{PnmError, Result};
pub use render::{read_png, scale_pixels, write_png};
pub use scene::{Canvas, Scene, Shape};
pub use transform::Op;
pub use types::{
    Bitmap, Colour, Encoding, Format, Graymap, Pixel, PixelKind, Pixmap, Point, Raster, TagStyle,
    DEFAULT_MAX,
};
