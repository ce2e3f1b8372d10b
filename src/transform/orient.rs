//! In-place transforms that keep the pixel kind: invert, mirror, rotate.

use crate::types::{Pixel, Raster};

impl<P: Pixel> Raster<P> {
    /// Replace every channel with `max - value`; negate bitmap pixels.
    pub fn invert(&mut self) {
        let max = self.max;
        for row in &mut self.rows {
            for pixel in row.iter_mut() {
                *pixel = pixel.invert(max);
            }
        }
    }

    /// Mirror horizontally: reverse the pixel order of every row.
    pub fn flip(&mut self) {
        for row in &mut self.rows {
            row.reverse();
        }
    }

    /// Mirror vertically: reverse the row order.
    pub fn flop(&mut self) {
        self.rows.reverse();
    }

    /// Rotate 90° clockwise. Width and height swap.
    pub fn rotate_cw(&mut self) {
        let (width, height) = (self.width, self.height);
        let rotated: Vec<Vec<P>> = (0..width)
            .map(|i| (0..height).map(|j| self.rows[height - 1 - j][i]).collect())
            .collect();

        self.rows = rotated;
        self.width = height;
        self.height = width;
    }
}
