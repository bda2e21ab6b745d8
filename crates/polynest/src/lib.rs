//! Containment analysis for collections of simple 2D polygons.
//!
//! Pipeline
//! - `polyfile` reads `.poly` text into an ordered `Vec<Polygon>`.
//! - `simplify` optionally thins detailed rings (Douglas–Peucker).
//! - `inclusion` tests one representative point of every polygon against every
//!   other polygon with a `pip` strategy and records the first container found.
//!
//! Assumption
//! - Inputs are properly nested or disjoint. Partially overlapping polygons give
//!   arbitrary answers because only one point per polygon is tested.

pub mod generate;
pub mod geom;
pub mod inclusion;
pub mod pip;
pub mod polyfile;
pub mod simplify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Douglas–Peucker tolerance used when callers do not pick one.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{cross, distance, segment_distance, Point, Polygon};
    pub use crate::inclusion::{
        solve, solve_with_method, CancelToken, InclusionMapping, SolveCfg, SolveError,
    };
    pub use crate::pip::{CrossProduct, CrossingNumber, Method, PointInPolygon, WindingNumber};
    pub use crate::polyfile::{drop_ghost, load_polygons, read_polygons, write_polygons};
    pub use crate::simplify::{simplify, simplify_all, try_simplify};
    pub use crate::DEFAULT_TOLERANCE;
}
