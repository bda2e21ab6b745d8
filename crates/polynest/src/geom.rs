//! Basic 2D types and distance primitives.
//!
//! - `Point`: plain `Vector2<f64>`, copied by value.
//! - `Polygon`: ordered ring of points, implicitly closed (last → first).
//! - `distance`, `segment_distance`, `cross`: pure helpers shared by the
//!   predicates and the simplifier.

use nalgebra::Vector2;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Simple polygon as an ordered, implicitly closed ring.
///
/// Invariants:
/// - No closing duplicate is required; the edge `pts[n-1] → pts[0]` is implied.
/// - Fewer than two points is degenerate: it encloses nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub pts: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(pts: Vec<Point>) -> Self {
        Self { pts }
    }

    /// Build from `(x, y)` pairs.
    pub fn from_xy(xy: &[(f64, f64)]) -> Self {
        Self {
            pts: xy.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Empty or single-point rings have no edges worth testing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.pts.len() < 2
    }

    /// Representative point used by the inclusion solver.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.pts.first().copied()
    }

    /// Directed edges `(pts[i], pts[i+1 mod n])`.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.pts.len();
        (0..n).map(move |i| (self.pts[i], self.pts[(i + 1) % n]))
    }
}

/// Euclidean distance.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

/// Distance from `p` to the closed segment `[a, b]`.
///
/// A zero-length segment degrades to `distance(p, a)` so the projection never
/// divides by zero.
pub fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    if a == b {
        return distance(p, a);
    }
    let d = b - a;
    let t = (p - a).dot(&d) / d.norm_squared();
    if t < 0.0 {
        distance(p, a)
    } else if t > 1.0 {
        distance(p, b)
    } else {
        distance(p, a + d * t)
    }
}

/// Orientation determinant of `(a - o, b - o)`; positive when `o → a → b` turns CCW.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}
