//! Midpoint circles and the horizontal span fill they share with the
//! other filled shapes.

use std::ops::RangeInclusive;

use crate::types::{Pixel, Point, Raster};

use super::line::widen;

impl<P: Pixel> Raster<P> {
    /// Draw a circle outline with the integer midpoint algorithm, plotting
    /// all eight octants per step. A zero radius draws the center pixel.
    pub fn draw_circle(&mut self, center: Point, radius: u32, value: P) {
        let (cx, cy) = widen(center);
        midpoint_steps(radius, |x, y| {
            self.plot(cx + x, cy + y, value);
            self.plot(cx + y, cy + x, value);
            self.plot(cx - y, cy + x, value);
            self.plot(cx - x, cy + y, value);
            self.plot(cx - x, cy - y, value);
            self.plot(cx - y, cy - x, value);
            self.plot(cx + y, cy - x, value);
            self.plot(cx + x, cy - y, value);
        });
    }

    /// Fill a circle with four horizontal spans per midpoint step.
    ///
    /// Spans are drawn only at the rows the octant walk visits, so small
    /// radii keep the walk's characteristic gaps near the diagonals.
    pub fn draw_filled_circle(&mut self, center: Point, radius: u32, value: P) {
        let (cx, cy) = widen(center);
        midpoint_steps(radius, |x, y| {
            self.fill_scanline(cx - y, cx + y, cy + x, value);
            self.fill_scanline(cx - y, cx + y, cy - x, value);
            self.fill_scanline(cx - x, cx + x, cy + y, value);
            self.fill_scanline(cx - x, cx + x, cy - y, value);
        });
    }

    /// Set every pixel of row `y` between `x1` and `x2` inclusive, in
    /// either order. The span is clipped to the canvas.
    pub fn fill_scanline(&mut self, x1: i64, x2: i64, y: i64, value: P) {
        let Ok(y) = usize::try_from(y) else {
            return;
        };
        if y >= self.height || self.width == 0 {
            return;
        }
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let Ok(hi) = usize::try_from(hi) else {
            return;
        };
        let lo = usize::try_from(lo).unwrap_or(0);
        let hi = hi.min(self.width - 1);
        if lo > hi {
            return;
        }

        let value = value.clamp(self.max);
        self.rows[y][lo..=hi].fill(value);
    }

    /// Rows of `top..=bottom` that lie on the canvas.
    pub(super) fn visible_rows(&self, top: i64, bottom: i64) -> RangeInclusive<i64> {
        let last = i64::try_from(self.height).unwrap_or(i64::MAX) - 1;
        top.max(0)..=bottom.min(last)
    }
}

/// Walk one octant of a midpoint circle, yielding `(x, y)` with `x >= y`.
fn midpoint_steps(radius: u32, mut step: impl FnMut(i64, i64)) {
    let mut x = i64::from(radius);
    let mut y = 0;
    let mut err = 0;

    while x >= y {
        step(x, y);
        y += 1;
        if err <= 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}
