use crate::geom::Point;

use super::PointInPolygon;

/// Even-odd parity test with an exact-vertex short-circuit.
///
/// A point equal to either endpoint of the edge under inspection is reported
/// inside immediately. Otherwise an edge straddling the point's y toggles
/// parity when the point is strictly left of the crossing. The crossing
/// abscissa is evaluated inline; the straddle check guarantees `y1 != y2`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrossProduct;

impl PointInPolygon for CrossProduct {
    fn name(&self) -> &'static str {
        "cross"
    }

    fn test_ring(&self, p: Point, ring: &[Point]) -> bool {
        let n = ring.len();
        let mut inside = false;
        for i in 0..n {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            if p == a || p == b {
                return true;
            }
            if (a.y > p.y) != (b.y > p.y) && p.x < a.x + (b.x - a.x) * (p.y - a.y) / (b.y - a.y) {
                inside = !inside;
            }
        }
        inside
    }
}
