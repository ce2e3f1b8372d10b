//! Netpbm encoding and decoding.
//!
//! Decoding validates the header line by line and then every row of pixel
//! data; any failure aborts the whole decode.
//!
//! # Usage
//!
//! ```ignore
//! use pnmkit::codec::{decode, AnyRaster};
//!
//! let image = decode(b"P2\n2 1\n255\n0 255\n")?;
//! if let AnyRaster::Graymap(mut gray) = image {
//!     gray.invert();
//!     let bytes = gray.encode();
//! }
//! ```

mod binary;
mod cursor;
mod header;
mod text;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{PnmError, Result};
use crate::types::{Bitmap, Encoding, Format, Graymap, Pixel, PixelKind, Pixmap, Raster, TagStyle};

use cursor::Cursor;
use header::{read_header, write_header, Header};

/// A decoded image of whichever pixel kind its header declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyRaster {
    Bitmap(Bitmap),
    Graymap(Graymap),
    Pixmap(Pixmap),
}

/// Decode an image of any pixel kind.
pub fn decode(bytes: &[u8]) -> Result<AnyRaster> {
    let mut cursor = Cursor::new(bytes);
    let header = read_header(&mut cursor)?;

    let image = match header.format.kind() {
        PixelKind::Bitmap => AnyRaster::Bitmap(decode_body(&mut cursor, &header)?),
        PixelKind::Gray => AnyRaster::Graymap(decode_body(&mut cursor, &header)?),
        PixelKind::Color => AnyRaster::Pixmap(decode_body(&mut cursor, &header)?),
    };

    Ok(image)
}

/// Decode an image that must be of pixel kind `P`.
pub fn decode_as<P: Pixel>(bytes: &[u8]) -> Result<Raster<P>> {
    let mut cursor = Cursor::new(bytes);
    let header = read_header(&mut cursor)?;

    if header.format.kind() != P::KIND {
        return Err(PnmError::KindMismatch {
            expected: P::KIND,
            found: header.format.kind(),
        });
    }

    decode_body(&mut cursor, &header)
}

fn decode_body<P: Pixel>(cursor: &mut Cursor<'_>, header: &Header) -> Result<Raster<P>> {
    let rows = match header.format.encoding() {
        Encoding::Text => text::decode_rows(cursor, header)?,
        Encoding::Binary => binary::decode_rows(cursor, header)?,
    };

    debug!(
        "decoded {} image {}x{} (max {})",
        header.format, header.width, header.height, header.max
    );

    Ok(Raster::from_parts(
        rows,
        header.width,
        header.format,
        header.tag_style,
        header.max,
    ))
}

/// Encode a raster in its stored format.
pub fn encode<P: Pixel>(raster: &Raster<P>) -> Vec<u8> {
    let mut out = Vec::new();
    write_header(
        &mut out,
        raster.format(),
        raster.tag_style(),
        raster.width(),
        raster.height(),
        raster.max(),
    );

    match raster.encoding() {
        Encoding::Text => text::encode_rows(raster.rows(), &mut out),
        Encoding::Binary => binary::encode_rows(raster.rows(), &mut out),
    }

    out
}

/// Encode a raster into a writer.
pub fn write_to<P: Pixel, W: Write>(raster: &Raster<P>, mut writer: W) -> Result<()> {
    writer.write_all(&encode(raster))?;
    writer.flush()?;
    Ok(())
}

/// Read and decode an image file.
pub fn read_file(path: &Path) -> Result<AnyRaster> {
    let bytes = read_bytes(path)?;
    decode(&bytes)
}

/// Read and decode an image file that must be of pixel kind `P`.
pub fn read_file_as<P: Pixel>(path: &Path) -> Result<Raster<P>> {
    let bytes = read_bytes(path)?;
    decode_as(&bytes)
}

/// Encode a raster and write it to `path`, replacing any existing file.
pub fn write_file<P: Pixel>(raster: &Raster<P>, path: &Path) -> Result<()> {
    let io_error = |e: std::io::Error| PnmError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&encode(raster)).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    debug!("wrote {} image to {}", raster.format(), path.display());
    Ok(())
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|e| PnmError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

impl<P: Pixel> Raster<P> {
    /// Decode bytes that must hold an image of this pixel kind.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        decode_as(bytes)
    }

    /// Encode in the stored format.
    pub fn encode(&self) -> Vec<u8> {
        encode(self)
    }

    /// Read an image file of this pixel kind.
    pub fn load(path: &Path) -> Result<Self> {
        read_file_as(path)
    }

    /// Write to a file in the stored format.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_file(self, path)
    }
}

impl AnyRaster {
    pub fn format(&self) -> Format {
        match self {
            AnyRaster::Bitmap(r) => r.format(),
            AnyRaster::Graymap(r) => r.format(),
            AnyRaster::Pixmap(r) => r.format(),
        }
    }

    pub fn kind(&self) -> PixelKind {
        self.format().kind()
    }

    pub fn tag_style(&self) -> TagStyle {
        match self {
            AnyRaster::Bitmap(r) => r.tag_style(),
            AnyRaster::Graymap(r) => r.tag_style(),
            AnyRaster::Pixmap(r) => r.tag_style(),
        }
    }

    pub fn set_tag_style(&mut self, style: TagStyle) {
        match self {
            AnyRaster::Bitmap(r) => r.set_tag_style(style),
            AnyRaster::Graymap(r) => r.set_tag_style(style),
            AnyRaster::Pixmap(r) => r.set_tag_style(style),
        }
    }

    /// The header tag as it is spelled when encoded.
    pub fn tag(&self) -> &'static str {
        self.format().tag(self.tag_style())
    }

    /// Dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        match self {
            AnyRaster::Bitmap(r) => r.size(),
            AnyRaster::Graymap(r) => r.size(),
            AnyRaster::Pixmap(r) => r.size(),
        }
    }

    /// The declared max value; `None` for bitmaps.
    pub fn max(&self) -> Option<u8> {
        match self {
            AnyRaster::Bitmap(r) => r.max(),
            AnyRaster::Graymap(r) => r.max(),
            AnyRaster::Pixmap(r) => r.max(),
        }
    }

    /// Switch to another format of the same pixel kind.
    pub fn set_format(&mut self, format: Format) -> Result<()> {
        match self {
            AnyRaster::Bitmap(r) => r.set_format(format),
            AnyRaster::Graymap(r) => r.set_format(format),
            AnyRaster::Pixmap(r) => r.set_format(format),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            AnyRaster::Bitmap(r) => encode(r),
            AnyRaster::Graymap(r) => encode(r),
            AnyRaster::Pixmap(r) => encode(r),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        match self {
            AnyRaster::Bitmap(r) => write_file(r, path),
            AnyRaster::Graymap(r) => write_file(r, path),
            AnyRaster::Pixmap(r) => write_file(r, path),
        }
    }
}

impl From<Bitmap> for AnyRaster {
    fn from(raster: Bitmap) -> Self {
        AnyRaster::Bitmap(raster)
    }
}

impl From<Graymap> for AnyRaster {
    fn from(raster: Graymap) -> Self {
        AnyRaster::Graymap(raster)
    }
}

impl From<Pixmap> for AnyRaster {
    fn from(raster: Pixmap) -> Self {
        AnyRaster::Pixmap(raster)
    }
}
