//! Colour-depth reduction: colour → gray, gray/colour → bitmap.
//!
//! Converted images use the textual encoding of their new kind and keep
//! the source's tag spelling.

use crate::types::{Bitmap, Colour, Format, Graymap, Pixel, PixelKind, Pixmap, Raster, DEFAULT_MAX};

impl Pixmap {
    /// Average the three channels (truncated). The result's max is 255.
    pub fn to_gray(&self) -> Graymap {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(|c| c.average()).collect())
            .collect();

        Raster::from_parts(
            rows,
            self.width,
            Format::GrayText,
            self.tag_style,
            DEFAULT_MAX,
        )
    }

    /// Threshold the channel average against `max / 2`.
    pub fn to_bitmap(&self) -> Bitmap {
        threshold(self)
    }
}

impl Graymap {
    /// Threshold each value against `max / 2`.
    pub fn to_bitmap(&self) -> Bitmap {
        threshold(self)
    }

    /// Promote to colour by copying the value into all three channels.
    pub fn to_colour(&self) -> Pixmap {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(|&v| Colour::rgb(v, v, v)).collect())
            .collect();

        Raster::from_parts(
            rows,
            self.width,
            Format::new(PixelKind::Color, self.encoding()),
            self.tag_style,
            self.max,
        )
    }
}

/// A pixel is on iff its intensity is strictly above `max / 2`.
fn threshold<P: Pixel>(source: &Raster<P>) -> Bitmap {
    let cutoff = source.max / 2;
    let rows = source
        .rows
        .iter()
        .map(|row| row.iter().map(|p| p.intensity() > cutoff).collect())
        .collect();

    Raster::from_parts(
        rows,
        source.width,
        Format::BitmapText,
        source.tag_style,
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Encoding, TagStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_gray_truncates_average() {
        let pixmap = Pixmap::from_rows(
            vec![vec![Colour::rgb(1, 1, 2), Colour::rgb(255, 255, 255)]],
            Encoding::Binary,
            255,
        )
        .unwrap();

        let gray = pixmap.to_gray();
        assert_eq!(gray.rows(), &[vec![1u8, 255]]);
        assert_eq!(gray.max(), Some(255));
        assert_eq!(gray.format(), Format::GrayText);
    }

    #[test]
    fn test_gray_threshold_is_strict() {
        let gray = Graymap::from_rows(vec![vec![0, 127, 128, 255]], Encoding::Text, 255).unwrap();
        let bitmap = gray.to_bitmap();
        assert_eq!(bitmap.rows(), &[vec![false, false, true, true]]);
        assert_eq!(bitmap.max(), None);
        assert_eq!(bitmap.format(), Format::BitmapText);
    }

    #[test]
    fn test_threshold_all_max_and_all_zero() {
        let full = Graymap::from_rows(vec![vec![9; 4]; 3], Encoding::Text, 9).unwrap();
        assert!(full.to_bitmap().iter_pixels().all(|(_, _, on)| on));

        let empty = Graymap::from_rows(vec![vec![0; 4]; 3], Encoding::Text, 9).unwrap();
        assert!(empty.to_bitmap().iter_pixels().all(|(_, _, on)| !on));
    }

    #[test]
    fn test_colour_threshold_uses_average() {
        let pixmap = Pixmap::from_rows(
            vec![vec![Colour::rgb(255, 0, 0), Colour::rgb(255, 255, 0)]],
            Encoding::Text,
            255,
        )
        .unwrap();
        // averages 85 and 170 against a cutoff of 127
        assert_eq!(pixmap.to_bitmap().rows(), &[vec![false, true]]);
    }

    #[test]
    fn test_conversion_keeps_tag_style() {
        let mut pixmap = Pixmap::new(1, 1, Encoding::Text);
        pixmap.set_tag_style(TagStyle::Named);
        assert_eq!(pixmap.to_gray().tag_style(), TagStyle::Named);
        assert_eq!(pixmap.to_bitmap().tag_style(), TagStyle::Named);
    }

    #[test]
    fn test_gray_to_colour() {
        let gray = Graymap::from_rows(vec![vec![3, 7]], Encoding::Binary, 7).unwrap();
        let pixmap = gray.to_colour();
        assert_eq!(pixmap.format(), Format::ColorBinary);
        assert_eq!(pixmap.max(), Some(7));
        assert_eq!(pixmap.rows(), &[vec![Colour::rgb(3, 3, 3), Colour::rgb(7, 7, 7)]]);
    }
}
