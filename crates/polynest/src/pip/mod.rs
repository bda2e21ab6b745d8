//! Point-in-polygon predicates.
//!
//! Purpose
//! - One contract, `PointInPolygon::inside`, with three strategies that trade
//!   robustness against simplicity: `CrossingNumber`, `WindingNumber`,
//!   `CrossProduct`.
//! - `Method` is the closed runtime key for picking a strategy once, before a
//!   solve; callers then stay generic over the concrete type.
//!
//! Boundary points
//! - The strategies disagree on points lying exactly on an edge or vertex.
//!   Only strictly interior/exterior points of simple rings are comparable.

mod cross_product;
mod crossing;
mod winding;

pub use cross_product::CrossProduct;
pub use crossing::CrossingNumber;
pub use winding::WindingNumber;

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Polygon};

/// Shared predicate contract: deterministic, O(m) in edge count, side-effect free.
pub trait PointInPolygon {
    /// Stable short name (`ray`, `winding`, `cross`).
    fn name(&self) -> &'static str;

    /// Strategy body. `ring` always holds at least two points.
    fn test_ring(&self, p: Point, ring: &[Point]) -> bool;

    /// Whether `p` lies inside `poly`. Degenerate polygons contain nothing.
    #[inline]
    fn inside(&self, p: Point, poly: &Polygon) -> bool {
        if poly.is_degenerate() {
            return false;
        }
        self.test_ring(p, &poly.pts)
    }
}

/// Strategy selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Ray casting with the original's stored x-intercept.
    Ray,
    /// Signed winding count.
    Winding,
    /// Parity test with exact-vertex short-circuit.
    #[default]
    Cross,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Ray, Method::Winding, Method::Cross];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Ray => CrossingNumber.name(),
            Method::Winding => WindingNumber.name(),
            Method::Cross => CrossProduct.name(),
        }
    }

    /// Evaluate once without going through a generic solve.
    pub fn inside(&self, p: Point, poly: &Polygon) -> bool {
        match self {
            Method::Ray => CrossingNumber.inside(p, poly),
            Method::Winding => WindingNumber.inside(p, poly),
            Method::Cross => CrossProduct.inside(p, poly),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Unknown predicate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMethodError {
    pub given: String,
}

impl fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown point-in-polygon method '{}' (expected ray, winding or cross)",
            self.given
        )
    }
}

impl std::error::Error for ParseMethodError {}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ray" | "ray-tracing" | "ray-casting" | "crossing" => Ok(Method::Ray),
            "winding" | "winding-number" => Ok(Method::Winding),
            "cross" | "cross-product" => Ok(Method::Cross),
            _ => Err(ParseMethodError {
                given: s.to_string(),
            }),
        }
    }
}
