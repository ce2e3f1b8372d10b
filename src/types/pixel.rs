//! The pixel capability trait.
//!
//! Each pixel kind knows how many samples it carries, how to build itself
//! from samples, and how its rows are laid out in the binary encoding. The
//! codec, transforms and rasterizer are written once against this trait.

use std::fmt;

use super::{Colour, PixelKind};

/// A pixel value stored in a [`Raster`](super::Raster).
pub trait Pixel: Copy + Default + PartialEq + fmt::Debug {
    /// The kind this pixel type represents.
    const KIND: PixelKind;

    /// Samples per pixel.
    const CHANNELS: usize = Self::KIND.channels();

    /// Build a pixel from exactly `CHANNELS` samples.
    fn from_samples(samples: &[u8]) -> Self;

    /// Append this pixel's samples to `out`.
    fn push_samples(self, out: &mut Vec<u8>);

    /// `max - value` per channel (logical negation for bitmaps).
    fn invert(self, max: u8) -> Self;

    /// Single-channel intensity used for thresholding.
    fn intensity(self) -> u8;

    /// Clamp every channel to `max`.
    fn clamp(self, max: u8) -> Self;

    /// Display colour with channels stretched from `[0, max]` to `[0, 255]`.
    fn to_rgb(self, max: u8) -> [u8; 3];

    /// Bytes one row occupies in the binary encoding.
    fn binary_row_len(width: usize) -> usize {
        width * Self::CHANNELS
    }

    /// Decode one binary row. `bytes` holds at least `binary_row_len(width)`
    /// bytes.
    fn decode_binary_row(bytes: &[u8], width: usize) -> Vec<Self> {
        bytes
            .chunks_exact(Self::CHANNELS)
            .take(width)
            .map(Self::from_samples)
            .collect()
    }

    /// Encode one binary row.
    fn encode_binary_row(row: &[Self], out: &mut Vec<u8>) {
        for &pixel in row {
            pixel.push_samples(out);
        }
    }
}

impl Pixel for bool {
    const KIND: PixelKind = PixelKind::Bitmap;

    fn from_samples(samples: &[u8]) -> Self {
        samples[0] != 0
    }

    fn push_samples(self, out: &mut Vec<u8>) {
        out.push(self as u8);
    }

    fn invert(self, _max: u8) -> Self {
        !self
    }

    fn intensity(self) -> u8 {
        self as u8
    }

    fn clamp(self, _max: u8) -> Self {
        self
    }

    // Ink is black on white paper.
    fn to_rgb(self, _max: u8) -> [u8; 3] {
        if self {
            [0, 0, 0]
        } else {
            [255, 255, 255]
        }
    }

    fn binary_row_len(width: usize) -> usize {
        width.div_ceil(8)
    }

    fn decode_binary_row(bytes: &[u8], width: usize) -> Vec<Self> {
        (0..width)
            .map(|x| (bytes[x / 8] >> (7 - x % 8)) & 1 == 1)
            .collect()
    }

    fn encode_binary_row(row: &[Self], out: &mut Vec<u8>) {
        for chunk in row.chunks(8) {
            let mut byte = 0u8;
            for (i, &on) in chunk.iter().enumerate() {
                if on {
                    byte |= 0x80 >> i;
                }
            }
            out.push(byte);
        }
    }
}

impl Pixel for u8 {
    const KIND: PixelKind = PixelKind::Gray;

    fn from_samples(samples: &[u8]) -> Self {
        samples[0]
    }

    fn push_samples(self, out: &mut Vec<u8>) {
        out.push(self);
    }

    fn invert(self, max: u8) -> Self {
        max.saturating_sub(self)
    }

    fn intensity(self) -> u8 {
        self
    }

    fn clamp(self, max: u8) -> Self {
        self.min(max)
    }

    fn to_rgb(self, max: u8) -> [u8; 3] {
        let v = stretch(self, max);
        [v, v, v]
    }
}

impl Pixel for Colour {
    const KIND: PixelKind = PixelKind::Color;

    fn from_samples(samples: &[u8]) -> Self {
        Colour::rgb(samples[0], samples[1], samples[2])
    }

    fn push_samples(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_array());
    }

    fn invert(self, max: u8) -> Self {
        Colour::rgb(
            max.saturating_sub(self.r),
            max.saturating_sub(self.g),
            max.saturating_sub(self.b),
        )
    }

    fn intensity(self) -> u8 {
        self.average()
    }

    fn clamp(self, max: u8) -> Self {
        Colour::rgb(self.r.min(max), self.g.min(max), self.b.min(max))
    }

    fn to_rgb(self, max: u8) -> [u8; 3] {
        [stretch(self.r, max), stretch(self.g, max), stretch(self.b, max)]
    }
}

fn stretch(value: u8, max: u8) -> u8 {
    if max == 0 {
        return value;
    }
    (value.min(max) as u16 * 255 / max as u16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        assert_eq!(<bool as Pixel>::CHANNELS, 1);
        assert_eq!(<u8 as Pixel>::CHANNELS, 1);
        assert_eq!(<Colour as Pixel>::CHANNELS, 3);
    }

    #[test]
    fn test_bitmap_row_len_rounds_up() {
        assert_eq!(bool::binary_row_len(0), 0);
        assert_eq!(bool::binary_row_len(1), 1);
        assert_eq!(bool::binary_row_len(8), 1);
        assert_eq!(bool::binary_row_len(9), 2);
        assert_eq!(bool::binary_row_len(15), 2);
    }

    #[test]
    fn test_bitmap_packs_msb_first_and_pads() {
        let row = [true, false, false, false, false, false, false, true, true];
        let mut out = Vec::new();
        bool::encode_binary_row(&row, &mut out);
        assert_eq!(out, vec![0b1000_0001, 0b1000_0000]);
    }

    #[test]
    fn test_bitmap_unpacks_only_width_bits() {
        let row = bool::decode_binary_row(&[0b1010_0000, 0xFF], 10);
        assert_eq!(
            row,
            vec![true, false, true, false, false, false, false, false, true, true]
        );
    }

    #[test]
    fn test_colour_binary_row() {
        let row = Colour::decode_binary_row(&[1, 2, 3, 4, 5, 6], 2);
        assert_eq!(row, vec![Colour::rgb(1, 2, 3), Colour::rgb(4, 5, 6)]);

        let mut out = Vec::new();
        Colour::encode_binary_row(&row, &mut out);
        assert_eq!(out, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invert() {
        assert!(!true.invert(1));
        assert_eq!(10u8.invert(100), 90);
        assert_eq!(
            Colour::rgb(0, 100, 255).invert(255),
            Colour::rgb(255, 155, 0)
        );
    }

    #[test]
    fn test_to_rgb_stretches() {
        assert_eq!(true.to_rgb(1), [0, 0, 0]);
        assert_eq!(false.to_rgb(1), [255, 255, 255]);
        assert_eq!(15u8.to_rgb(15), [255, 255, 255]);
        assert_eq!(5u8.to_rgb(15), [85, 85, 85]);
        assert_eq!(Colour::rgb(1, 0, 3).to_rgb(3), [85, 0, 255]);
    }

    #[test]
    fn test_intensity() {
        assert_eq!(true.intensity(), 1);
        assert_eq!(42u8.intensity(), 42);
        assert_eq!(Colour::rgb(30, 60, 91).intensity(), 60);
    }
}
