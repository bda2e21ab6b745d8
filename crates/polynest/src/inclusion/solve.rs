//! First-match inclusion search.

use std::time::Instant;

use rayon::prelude::*;

use crate::geom::Polygon;
use crate::pip::{CrossProduct, CrossingNumber, Method, PointInPolygon, WindingNumber};

use super::types::{CancelToken, InclusionMapping, SolveCfg, SolveError};

/// Compute the inclusion mapping of `polys` under predicate `pred`.
///
/// For each `i` (ascending) the first point of polygon `i` is tested against
/// every other polygon `j` in ascending order; the first hit is recorded and
/// the scan for `i` stops. Empty polygons have no representative point and map
/// to `None`. Cost is O(n²·m).
///
/// With `cfg.parallel` the outer loop runs on rayon; each inner scan stays
/// ordered, so the mapping equals the sequential one.
pub fn solve<P>(polys: &[Polygon], pred: &P, cfg: &SolveCfg) -> Result<InclusionMapping, SolveError>
where
    P: PointInPolygon + Sync,
{
    let n = polys.len();
    let guard = Guard::new(cfg);
    tracing::debug!(
        polygons = n,
        method = pred.name(),
        parallel = cfg.parallel,
        "solve start"
    );
    let parent: Vec<Option<usize>> = if cfg.parallel {
        (0..n)
            .into_par_iter()
            .map(|i| {
                guard.check()?;
                Ok(first_container(polys, i, pred))
            })
            .collect::<Result<_, SolveError>>()?
    } else {
        (0..n)
            .map(|i| {
                guard.check()?;
                Ok(first_container(polys, i, pred))
            })
            .collect::<Result<_, SolveError>>()?
    };
    let mapping = InclusionMapping::from(parent);
    tracing::debug!(
        contained = n - mapping.roots().len(),
        elapsed = ?guard.start.elapsed(),
        "solve done"
    );
    Ok(mapping)
}

/// Pick the strategy for `method` once and run [`solve`] with it.
pub fn solve_with_method(
    polys: &[Polygon],
    method: Method,
    cfg: &SolveCfg,
) -> Result<InclusionMapping, SolveError> {
    match method {
        Method::Ray => solve(polys, &CrossingNumber, cfg),
        Method::Winding => solve(polys, &WindingNumber, cfg),
        Method::Cross => solve(polys, &CrossProduct, cfg),
    }
}

/// First `j != i` (ascending) whose polygon contains `polys[i]`'s first point.
fn first_container<P: PointInPolygon>(polys: &[Polygon], i: usize, pred: &P) -> Option<usize> {
    let p = polys[i].first()?;
    polys
        .iter()
        .enumerate()
        .find(|&(j, poly)| j != i && pred.inside(p, poly))
        .map(|(j, _)| j)
}

/// Deadline and cancellation state for one solve call.
struct Guard {
    start: Instant,
    deadline: Option<Instant>,
    cancel: Option<CancelToken>,
}

impl Guard {
    fn new(cfg: &SolveCfg) -> Self {
        let start = Instant::now();
        Self {
            start,
            deadline: cfg.timeout.map(|t| start + t),
            cancel: cfg.cancel.clone(),
        }
    }

    fn check(&self) -> Result<(), SolveError> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(SolveError::Cancelled);
        }
        if let Some(deadline) = self.deadline {
            let now = Instant::now();
            if now >= deadline {
                return Err(SolveError::DeadlineExceeded {
                    elapsed: now - self.start,
                });
            }
        }
        Ok(())
    }
}
