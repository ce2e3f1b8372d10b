//! Straight-edged outlines: lines, rectangles, triangles, polygons.

use std::ops::RangeInclusive;

use crate::types::{Pixel, Point, Raster};

impl<P: Pixel> Raster<P> {
    /// Draw a line with integer Bresenham stepping, both endpoints
    /// included.
    pub fn draw_line(&mut self, from: Point, to: Point, value: P) {
        self.stroke(widen(from), widen(to), value);
    }

    /// Bresenham between two `i64` points.
    ///
    /// The pixel `k` steps along the major axis sits `round(k * minor /
    /// major)` steps along the minor axis, halves rounding away from the
    /// start. Only the steps whose major coordinate lands on the canvas are
    /// walked, so endpoints anywhere in `i32` range cost at most one pass
    /// across the canvas.
    pub(super) fn stroke(&mut self, (x0, y0): (i64, i64), (x1, y1): (i64, i64), value: P) {
        let (dx, dy) = (x1 - x0, y1 - y0);
        let (sx, sy) = (dx.signum(), dy.signum());
        let (adx, ady) = (dx.abs(), dy.abs());

        if adx >= ady {
            for k in on_canvas(x0, sx, adx, self.width) {
                self.plot(x0 + sx * k, y0 + sy * minor_offset(k, ady, adx), value);
            }
        } else {
            for k in on_canvas(y0, sy, ady, self.height) {
                self.plot(x0 + sx * minor_offset(k, adx, ady), y0 + sy * k, value);
            }
        }
    }

    /// Draw the four border lines of the `width × height` box whose
    /// top-left corner is `at`, with the far corner at
    /// `(at.x + width, at.y + height)`. A zero extent draws nothing.
    pub fn draw_rectangle(&mut self, at: Point, width: u32, height: u32, value: P) {
        if width == 0 || height == 0 {
            return;
        }
        let (left, top) = widen(at);
        let right = left + i64::from(width);
        let bottom = top + i64::from(height);

        self.stroke((left, top), (right, top), value);
        self.stroke((left, bottom), (right, bottom), value);
        self.stroke((left, top), (left, bottom), value);
        self.stroke((right, top), (right, bottom), value);
    }

    /// Fill `[at.x, at.x + width) × [at.y, at.y + height)`.
    pub fn draw_filled_rectangle(&mut self, at: Point, width: u32, height: u32, value: P) {
        if width == 0 {
            return;
        }
        let (left, top) = widen(at);
        let right = left + i64::from(width) - 1;
        for y in self.visible_rows(top, top + i64::from(height) - 1) {
            self.fill_scanline(left, right, y, value);
        }
    }

    /// Draw the three edges of a triangle.
    pub fn draw_triangle(&mut self, a: Point, b: Point, c: Point, value: P) {
        self.draw_line(a, b, value);
        self.draw_line(b, c, value);
        self.draw_line(c, a, value);
    }

    /// Connect consecutive vertices and close the last one back to the
    /// first. A single vertex draws one pixel.
    pub fn draw_polygon(&mut self, points: &[Point], value: P) {
        let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
            return;
        };
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], value);
        }
        self.draw_line(last, first, value);
    }
}

pub(super) fn widen(point: Point) -> (i64, i64) {
    (i64::from(point.x), i64::from(point.y))
}

/// Steps `k` in `0..=len` for which `start + step * k` lies in `0..size`.
fn on_canvas(start: i64, step: i64, len: i64, size: usize) -> RangeInclusive<i64> {
    let last = i64::try_from(size).unwrap_or(i64::MAX) - 1;
    match step {
        1 => (-start).max(0)..=len.min(last - start),
        -1 => (start - last).max(0)..=len.min(start),
        _ if (0..=last).contains(&start) => 0..=0,
        _ => 1..=0,
    }
}

/// `round(k * minor / major)` with halves rounded up, in `i128` so any
/// pair of `i32` endpoints fits.
fn minor_offset(k: i64, minor: i64, major: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let (k, minor, major) = (i128::from(k), i128::from(minor), i128::from(major));
    ((2 * k * minor + major) / (2 * major)) as i64
}
