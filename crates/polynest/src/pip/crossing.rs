use crate::geom::Point;

use super::PointInPolygon;

/// Crossing-number (ray casting) test along a horizontal ray towards -x.
///
/// Edges are visited as `(p1, p2)` pairs starting from `ring[0]` and wrapping
/// back to it. An edge counts when the point's y lies in `(min_y, max_y]` and
/// its x is at most `max_x`; it toggles when the edge is vertical or the point
/// is left of (or on) the edge's x-intercept.
///
/// The intercept is kept in a variable that outlives each iteration and is only
/// refreshed for non-horizontal edges. A horizontal edge has an empty
/// `(min_y, max_y]` window, so the stored value is never read stale. The
/// behaviour is kept as-is and pinned by `crossing_skips_horizontal_edges`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrossingNumber;

impl PointInPolygon for CrossingNumber {
    fn name(&self) -> &'static str {
        "ray"
    }

    fn test_ring(&self, p: Point, ring: &[Point]) -> bool {
        let n = ring.len();
        let (x, y) = (p.x, p.y);
        let mut inside = false;
        let mut x_int = f64::NAN;
        let mut p1 = ring[0];
        for i in 0..=n {
            let p2 = ring[i % n];
            if y > p1.y.min(p2.y) && y <= p1.y.max(p2.y) && x <= p1.x.max(p2.x) {
                if p1.y != p2.y {
                    x_int = (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                }
                if p1.x == p2.x || x <= x_int {
                    inside = !inside;
                }
            }
            p1 = p2;
        }
        inside
    }
}
