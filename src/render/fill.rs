//! Scanline fills for triangles and arbitrary polygons.

use crate::types::{Pixel, Point, Raster};

use super::line::widen;

impl<P: Pixel> Raster<P> {
    /// Fill a triangle by scanning rows between its edges.
    ///
    /// Vertices are sorted top to bottom. Rows from the top vertex down to
    /// the middle one are bounded by the short edge top→middle and the long
    /// edge top→bottom; the remaining rows by middle→bottom and the long
    /// edge. Edge positions are truncated toward zero. A flat edge has no
    /// slope and stays at its starting vertex.
    pub fn draw_filled_triangle(&mut self, a: Point, b: Point, c: Point, value: P) {
        let mut v = [a, b, c];
        v.sort_by_key(|p| p.y);
        let [v0, v1, v2] = v.map(widen);

        for y in self.visible_rows(v0.1, v1.1) {
            self.fill_scanline(edge_x(v0, v1, y), edge_x(v0, v2, y), y, value);
        }
        for y in self.visible_rows(v1.1 + 1, v2.1) {
            self.fill_scanline(edge_x(v1, v2, y), edge_x(v0, v2, y), y, value);
        }
    }

    /// Fill a polygon with the even-odd scanline rule.
    ///
    /// An edge crosses row `y` when exactly one endpoint lies at or above
    /// it, so the lowest row of each edge is excluded. Crossings are sorted
    /// and filled pairwise, inclusive of both ends.
    pub fn draw_filled_polygon(&mut self, points: &[Point], value: P) {
        let points: Vec<(i64, i64)> = points.iter().copied().map(widen).collect();
        let (Some(min_y), Some(max_y)) = (
            points.iter().map(|p| p.1).min(),
            points.iter().map(|p| p.1).max(),
        ) else {
            return;
        };

        let mut crossings = Vec::with_capacity(points.len());
        for y in self.visible_rows(min_y, max_y) {
            crossings.clear();
            for (i, &(ax, ay)) in points.iter().enumerate() {
                let (bx, by) = points[(i + 1) % points.len()];
                if (ay <= y && by > y) || (ay > y && by <= y) {
                    let t = (y - ay) as f64 / (by - ay) as f64;
                    crossings.push((ax as f64 + t * (bx - ax) as f64) as i64);
                }
            }
            crossings.sort_unstable();

            for pair in crossings.chunks_exact(2) {
                self.fill_scanline(pair[0], pair[1], y, value);
            }
        }
    }
}

/// X position of edge `a→b` at row `y`. A flat edge sits at `a.x`.
fn edge_x((ax, ay): (i64, i64), (bx, by): (i64, i64), y: i64) -> i64 {
    if by == ay {
        return ax;
    }
    let slope = (bx - ax) as f64 / (by - ay) as f64;
    (ax as f64 + slope * (y - ay) as f64) as i64
}
