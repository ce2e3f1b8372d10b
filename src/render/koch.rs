//! Koch snowflake.

use std::f64::consts::FRAC_PI_6;

use crate::types::{Pixel, Point, Raster};

use super::line::widen;

type Vertex = (i64, i64);

impl<P: Pixel> Raster<P> {
    /// Draw a Koch snowflake on the triangle inscribed in the circle of
    /// `radius` around `center`, refining each side `depth` times.
    ///
    /// Depth 0 is the plain triangle. Each refinement replaces a segment
    /// with four, raising an outward bump on its middle third.
    pub fn draw_koch_snowflake(&mut self, center: Point, radius: u32, depth: u32, value: P) {
        let (cx, cy) = widen(center);
        let r = f64::from(radius);
        let dx = (r * FRAC_PI_6.cos()) as i64;
        let dy = (r * FRAC_PI_6.sin()) as i64;

        let top = (cx, cy - i64::from(radius));
        let right = (cx + dx, cy + dy);
        let left = (cx - dx, cy + dy);

        self.draw_koch_segment(top, right, depth, value);
        self.draw_koch_segment(right, left, depth, value);
        self.draw_koch_segment(left, top, depth, value);
    }

    fn draw_koch_segment(&mut self, from: Vertex, to: Vertex, depth: u32, value: P) {
        if depth == 0 {
            self.stroke(from, to, value);
            return;
        }

        let a = lerp(from, to, 1.0 / 3.0);
        let b = lerp(from, to, 2.0 / 3.0);
        let apex = bump(a, b);

        self.draw_koch_segment(from, a, depth - 1, value);
        self.draw_koch_segment(a, apex, depth - 1, value);
        self.draw_koch_segment(apex, b, depth - 1, value);
        self.draw_koch_segment(b, to, depth - 1, value);
    }
}

fn lerp(from: Vertex, to: Vertex, t: f64) -> Vertex {
    (
        from.0 + ((to.0 - from.0) as f64 * t) as i64,
        from.1 + ((to.1 - from.1) as f64 * t) as i64,
    )
}

/// Third corner of the equilateral triangle on `a→b`, on the outer side
/// of a clockwise (screen-space) outline.
fn bump(a: Vertex, b: Vertex) -> Vertex {
    let (sin, cos) = (2.0 * FRAC_PI_6).sin_cos();
    let dx = (b.0 - a.0) as f64;
    let dy = (b.1 - a.1) as f64;
    (
        (a.0 as f64 + dx * cos + dy * sin) as i64,
        (a.1 as f64 - dx * sin + dy * cos) as i64,
    )
}
