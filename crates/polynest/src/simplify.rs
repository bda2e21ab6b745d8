//! Douglas–Peucker reduction of point sequences.
//!
//! Purpose
//! - Bound the edge count fed to the O(m) predicates so the O(n²·m) solve stays
//!   affordable on highly detailed rings. `tolerance` trades shape fidelity
//!   for speed; a large value can collapse a ring to its two end points.
//!
//! Algorithm
//! - For a span `[first..=last]`, find the first interior point with the largest
//!   segment distance to the chord. If such a point exists and its distance is
//!   `>= tolerance`, keep it and process both halves; otherwise drop every
//!   interior point of the span.
//! - Spans are processed from an explicit stack, so depth is independent of
//!   input size. The output matches the textbook recursive formulation.
//! - A span whose points all sit on the chord (distance exactly 0) always
//!   collapses, so `tolerance == 0` removes only exactly collinear points.

use std::fmt;

use crate::geom::{segment_distance, Point, Polygon};

/// Rejected simplifier input.
#[derive(Debug, Clone, PartialEq)]
pub enum SimplifyError {
    /// Tolerance must be finite and non-negative.
    InvalidTolerance { tolerance: f64 },
}

impl fmt::Display for SimplifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimplifyError::InvalidTolerance { tolerance } => {
                write!(f, "simplify tolerance must be finite and >= 0, got {tolerance}")
            }
        }
    }
}

impl std::error::Error for SimplifyError {}

/// Checked variant of [`simplify`].
pub fn try_simplify(points: &[Point], tolerance: f64) -> Result<Vec<Point>, SimplifyError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(SimplifyError::InvalidTolerance { tolerance });
    }
    Ok(reduce(points, tolerance))
}

/// Douglas–Peucker reduction. Negative tolerances behave like 0.
pub fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    reduce(points, tolerance.max(0.0))
}

/// Simplify every polygon in place; returns the number of points removed.
pub fn simplify_all(polys: &mut [Polygon], tolerance: f64) -> Result<usize, SimplifyError> {
    let mut removed = 0usize;
    for poly in polys.iter_mut() {
        let before = poly.pts.len();
        poly.pts = try_simplify(&poly.pts, tolerance)?;
        removed += before - poly.pts.len();
    }
    tracing::debug!(polygons = polys.len(), removed, tolerance, "simplified");
    Ok(removed)
}

fn reduce(points: &[Point], tolerance: f64) -> Vec<Point> {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }
    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;
    let mut stack: Vec<(usize, usize)> = vec![(0, n - 1)];
    while let Some((first, last)) = stack.pop() {
        if last - first < 2 {
            continue;
        }
        if let Some((k, d_max)) = farthest(points, first, last) {
            if d_max >= tolerance {
                keep[k] = true;
                stack.push((k, last));
                stack.push((first, k));
            }
        }
    }
    points
        .iter()
        .zip(&keep)
        .filter_map(|(p, &k)| k.then_some(*p))
        .collect()
}

/// First interior index with the strictly largest positive chord distance.
fn farthest(points: &[Point], first: usize, last: usize) -> Option<(usize, f64)> {
    let (a, b) = (points[first], points[last]);
    let mut best: Option<(usize, f64)> = None;
    let mut d_max = 0.0;
    for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
        let d = segment_distance(*p, a, b);
        if d > d_max {
            d_max = d;
            best = Some((i, d));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    fn pts(xy: &[(f64, f64)]) -> Vec<Point> {
        xy.iter().map(|&(x, y)| vector![x, y]).collect()
    }

    /// Straight recursive formulation, used as the reference.
    fn reduce_recursive(points: &[Point], tolerance: f64) -> Vec<Point> {
        if points.len() <= 2 {
            return points.to_vec();
        }
        let last = points.len() - 1;
        match farthest(points, 0, last) {
            Some((k, d)) if d >= tolerance => {
                let mut left = reduce_recursive(&points[..=k], tolerance);
                let right = reduce_recursive(&points[k..], tolerance);
                left.pop();
                left.extend(right);
                left
            }
            _ => vec![points[0], points[last]],
        }
    }

    #[test]
    fn short_sequences_unchanged() {
        assert!(simplify(&[], 1.0).is_empty());
        let one = pts(&[(1.0, 2.0)]);
        assert_eq!(simplify(&one, 0.0), one);
        let two = pts(&[(1.0, 2.0), (1.0, 2.0)]);
        assert_eq!(simplify(&two, 0.0), two);
    }

    #[test]
    fn square_survives_small_tolerance() {
        let sq = pts(&[(0.0, 0.0), (0.0, 5.0), (5.0, 5.0), (5.0, 0.0)]);
        assert_eq!(simplify(&sq, 0.01), sq);
    }

    #[test]
    fn zero_tolerance_drops_only_collinear_points() {
        let line = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 1.0), (4.0, 0.0)]);
        let out = simplify(&line, 0.0);
        assert_eq!(out, pts(&[(0.0, 0.0), (2.0, 0.0), (3.0, 1.0), (4.0, 0.0)]));
        let flat = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(simplify(&flat, 0.0), pts(&[(0.0, 0.0), (3.0, 0.0)]));
    }

    #[test]
    fn large_tolerance_collapses_to_endpoints() {
        let sq = pts(&[(0.0, 0.0), (0.0, 5.0), (5.0, 5.0), (5.0, 0.0)]);
        assert_eq!(simplify(&sq, 100.0), pts(&[(0.0, 0.0), (5.0, 0.0)]));
    }

    #[test]
    fn closed_ring_with_repeated_endpoint() {
        // first == last: chord is a point, distances fall back to point distance.
        let ring = pts(&[(0.0, 0.0), (0.0, 5.0), (5.0, 5.0), (5.0, 0.0), (0.0, 0.0)]);
        let out = simplify(&ring, 0.01);
        assert_eq!(out, ring);
        assert!(out.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn duplicate_points_do_not_loop() {
        let dup = pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
        assert_eq!(simplify(&dup, 0.0), pts(&[(1.0, 1.0), (1.0, 1.0)]));
    }

    #[test]
    fn invalid_tolerance_rejected() {
        let sq = pts(&[(0.0, 0.0), (0.0, 5.0), (5.0, 5.0)]);
        assert!(matches!(
            try_simplify(&sq, -1.0),
            Err(SimplifyError::InvalidTolerance { .. })
        ));
        assert!(try_simplify(&sq, f64::NAN).is_err());
        assert_eq!(simplify(&sq, -1.0), simplify(&sq, 0.0));
    }

    #[test]
    fn simplify_all_counts_removed_points() {
        let mut polys = vec![
            Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0)]),
            Polygon::default(),
        ];
        let removed = simplify_all(&mut polys, 0.0).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(polys[0].len(), 3);
        assert!(polys[1].is_empty());
    }

    fn arb_points() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..40)
            .prop_map(|v| v.into_iter().map(|(x, y)| vector![x, y]).collect())
    }

    proptest! {
        #[test]
        fn iterative_matches_recursive(points in arb_points(), tol in 0.0f64..50.0) {
            prop_assert_eq!(simplify(&points, tol), reduce_recursive(&points, tol));
        }

        #[test]
        fn idempotent(points in arb_points(), tol in 0.0f64..50.0) {
            let once = simplify(&points, tol);
            prop_assert_eq!(simplify(&once, tol), once);
        }

        #[test]
        fn keeps_endpoints_and_order(points in arb_points(), tol in 0.0f64..50.0) {
            let out = simplify(&points, tol);
            prop_assert!(out.len() <= points.len());
            if points.len() >= 2 {
                prop_assert_eq!(out.first(), points.first());
                prop_assert_eq!(out.last(), points.last());
            }
        }
    }
}
