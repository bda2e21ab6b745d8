use crate::geom::{cross, Point};

use super::PointInPolygon;

/// Winding-number test: inside iff the ring winds around the point.
///
/// Upward edges with the point strictly on their left count +1, downward edges
/// with the point strictly on their right count -1. Works for either ring
/// orientation and tolerates repeated vertices (zero-length edges never cross).
#[derive(Clone, Copy, Debug, Default)]
pub struct WindingNumber;

impl WindingNumber {
    /// Signed winding count of `ring` around `p`.
    pub fn winding(&self, p: Point, ring: &[Point]) -> i64 {
        let n = ring.len();
        let mut wn = 0i64;
        for i in 0..n {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            if a.y <= p.y {
                if b.y > p.y && cross(a, b, p) > 0.0 {
                    wn += 1;
                }
            } else if b.y <= p.y && cross(a, b, p) < 0.0 {
                wn -= 1;
            }
        }
        wn
    }
}

impl PointInPolygon for WindingNumber {
    fn name(&self) -> &'static str {
        "winding"
    }

    fn test_ring(&self, p: Point, ring: &[Point]) -> bool {
        self.winding(p, ring) != 0
    }
}
