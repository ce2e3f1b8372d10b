//! The raster buffer: a rectangular pixel grid plus format metadata.

use crate::error::{PnmError, Result};

use super::{Colour, Encoding, Format, Pixel, PixelKind, TagStyle};

/// A rectangular grid of pixels of one kind.
///
/// Rows are indexed by `y` first, then `x`. Every row holds exactly
/// `width` pixels and every channel is within `[0, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<P: Pixel> {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) format: Format,
    pub(crate) tag_style: TagStyle,
    /// Channel upper bound; always 1 for bitmaps.
    pub(crate) max: u8,
    /// Pixel grid (row-major: rows[y][x]).
    pub(crate) rows: Vec<Vec<P>>,
}

/// 1-bit raster (PBM).
pub type Bitmap = Raster<bool>;

/// 8-bit grayscale raster (PGM).
pub type Graymap = Raster<u8>;

/// 3×8-bit colour raster (PPM).
pub type Pixmap = Raster<Colour>;

/// Max value used for new gray and colour rasters.
pub const DEFAULT_MAX: u8 = 255;

fn default_max(kind: PixelKind) -> u8 {
    if kind.has_max() {
        DEFAULT_MAX
    } else {
        1
    }
}

impl<P: Pixel> Raster<P> {
    /// Create a raster filled with the zero pixel.
    pub fn new(width: usize, height: usize, encoding: Encoding) -> Self {
        Self::filled(width, height, encoding, P::default())
    }

    /// Create a raster with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, encoding: Encoding, value: P) -> Self {
        let max = default_max(P::KIND);
        Self {
            width,
            height,
            format: Format::new(P::KIND, encoding),
            tag_style: TagStyle::default(),
            max,
            rows: vec![vec![value.clamp(max); width]; height],
        }
    }

    /// Build a raster from explicit rows.
    ///
    /// Fails if rows differ in length or a channel exceeds `max`. For
    /// bitmaps `max` is ignored.
    pub fn from_rows(rows: Vec<Vec<P>>, encoding: Encoding, max: u8) -> Result<Self> {
        let max = if P::KIND.has_max() {
            validate_max(max)?
        } else {
            1
        };

        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(PnmError::MalformedRow {
                    row: y,
                    expected: width * P::CHANNELS,
                    found: row.len() * P::CHANNELS,
                });
            }
            if let Some(&pixel) = row.iter().find(|&&p| p.clamp(max) != p) {
                let mut samples = Vec::with_capacity(P::CHANNELS);
                pixel.push_samples(&mut samples);
                let value = samples.into_iter().max().unwrap_or_default();
                return Err(PnmError::SampleOutOfRange {
                    row: y,
                    value: value as u32,
                    max,
                });
            }
        }

        Ok(Self {
            width,
            height,
            format: Format::new(P::KIND, encoding),
            tag_style: TagStyle::default(),
            max,
            rows,
        })
    }

    /// Assemble a raster the codec has already validated.
    pub(crate) fn from_parts(
        rows: Vec<Vec<P>>,
        width: usize,
        format: Format,
        tag_style: TagStyle,
        max: u8,
    ) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == width));
        Self {
            width,
            height: rows.len(),
            format,
            tag_style,
            max,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn kind(&self) -> PixelKind {
        P::KIND
    }

    pub fn encoding(&self) -> Encoding {
        self.format.encoding()
    }

    /// How the header tag is spelled when encoded.
    pub fn tag_style(&self) -> TagStyle {
        self.tag_style
    }

    /// The declared max value; `None` for bitmaps.
    pub fn max(&self) -> Option<u8> {
        P::KIND.has_max().then_some(self.max)
    }

    /// Switch to another format of the same pixel kind.
    pub fn set_format(&mut self, format: Format) -> Result<()> {
        if format.kind() != P::KIND {
            return Err(PnmError::UnsupportedFormat {
                message: format!(
                    "cannot store a {} image as {} ({})",
                    P::KIND,
                    format,
                    format.kind()
                ),
            });
        }
        self.format = format;
        Ok(())
    }

    /// Switch between textual and binary encoding.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.format = self.format.with_encoding(encoding);
    }

    pub fn set_tag_style(&mut self, style: TagStyle) {
        self.tag_style = style;
    }

    /// Change the declared max value.
    ///
    /// Samples are not rescaled; any channel above the new max is clamped
    /// to it. Bitmaps have no max and reject this call.
    pub fn set_max(&mut self, max: u8) -> Result<()> {
        if !P::KIND.has_max() {
            return Err(PnmError::UnsupportedFormat {
                message: "bitmap images have no max value".to_string(),
            });
        }
        self.max = validate_max(max)?;
        for row in &mut self.rows {
            for pixel in row.iter_mut() {
                *pixel = pixel.clamp(max);
            }
        }
        Ok(())
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Option<P> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Set the pixel at (x, y), clamped to max.
    ///
    /// Returns `false` without writing when (x, y) is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: P) -> bool {
        let max = self.max;
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(pixel) => {
                *pixel = value.clamp(max);
                true
            }
            None => false,
        }
    }

    /// Signed pixel write used by the rasterizer. Off-canvas writes are
    /// dropped. Coordinates are `i64` so offsets from any `i32` point fit.
    pub fn plot(&mut self, x: i64, y: i64, value: P) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        self.set(x, y, value);
    }

    /// Pixel grid (row-major: rows[y][x]).
    pub fn rows(&self) -> &[Vec<P>] {
        &self.rows
    }

    /// Iterate over all pixels with their positions.
    pub fn iter_pixels(&self) -> impl Iterator<Item = (usize, usize, P)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, &p)| (x, y, p))
        })
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: P) {
        let value = value.clamp(self.max);
        for row in &mut self.rows {
            row.fill(value);
        }
    }
}

fn validate_max(max: u8) -> Result<u8> {
    if max == 0 {
        return Err(PnmError::InvalidMaxValue {
            found: max.to_string(),
        });
    }
    Ok(max)
}
