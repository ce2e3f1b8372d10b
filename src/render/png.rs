//! PNG bridge for viewing and importing rasters.
//!
//! Export maps every pixel kind to RGB for display with optional integer
//! scaling. Import reads any format the `image` crate understands into a
//! colour raster.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use log::debug;

use crate::codec::AnyRaster;
use crate::error::{PnmError, Result};
use crate::types::{Colour, Encoding, Pixel, Pixmap, Raster, DEFAULT_MAX};

/// Write a raster to a PNG file.
///
/// # Arguments
///
/// * `raster` - The raster to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
///
/// Bitmap ink is black on white. Gray and colour channels are stretched
/// from `[0, max]` to `[0, 255]`.
pub fn write_png<P: Pixel>(raster: &Raster<P>, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1);
    let pixels = scale_pixels(raster.rows(), scale);

    let height = pixels.len() as u32;
    let width = pixels.first().map_or(0, |r| r.len()) as u32;
    let max = raster.max().unwrap_or(1);

    let mut img: RgbImage = ImageBuffer::new(width, height);
    for (y, row) in pixels.iter().enumerate() {
        for (x, &pixel) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgb(pixel.to_rgb(max)));
        }
    }

    img.save(path).map_err(|e| PnmError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    debug!("exported {}x{} PNG to {}", width, height, path.display());
    Ok(())
}

/// Read an image file (PNG or anything else `image` decodes) as a colour
/// raster with max 255. Alpha is dropped.
pub fn read_png(path: &Path, encoding: Encoding) -> Result<Pixmap> {
    let img = image::open(path)
        .map_err(|e| PnmError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read image: {}", e),
        })?
        .to_rgb8();

    let rows: Vec<Vec<Colour>> = img
        .rows()
        .map(|row| row.map(|p| Colour::from(p.0)).collect())
        .collect();

    debug!("imported {}x{} image from {}", img.width(), img.height(), path.display());

    // Every u8 fits under the default max, and image rows are uniform.
    Pixmap::from_rows(rows, encoding, DEFAULT_MAX)
}

/// Scale a pixel grid by an integer factor.
///
/// Uses nearest-neighbour scaling so edges stay crisp.
pub fn scale_pixels<P: Copy>(pixels: &[Vec<P>], scale: u32) -> Vec<Vec<P>> {
    if scale <= 1 {
        return pixels.to_vec();
    }

    let scale = scale as usize;
    pixels
        .iter()
        .flat_map(|row| {
            let wide: Vec<P> = row
                .iter()
                .flat_map(|&p| std::iter::repeat(p).take(scale))
                .collect();
            std::iter::repeat(wide).take(scale)
        })
        .collect()
}

impl AnyRaster {
    /// Export to PNG; see [`write_png`].
    pub fn write_png(&self, path: &Path, scale: u32) -> Result<()> {
        match self {
            AnyRaster::Bitmap(r) => write_png(r, path, scale),
            AnyRaster::Graymap(r) => write_png(r, path, scale),
            AnyRaster::Pixmap(r) => write_png(r, path, scale),
        }
    }
}
