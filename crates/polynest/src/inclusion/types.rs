//! Data types for the inclusion solver.
//!
//! - `InclusionMapping`: per-polygon container index (or none).
//! - `SolveCfg`: parallelism, deadline and cancellation knobs.
//! - `CancelToken`: shared flag a caller can raise from another thread.
//! - `SolveError`: why a solve stopped early.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// First-found container of each polygon.
///
/// Entry `i` is `Some(j)` when polygon `j` was the first (in ascending `j`)
/// to contain polygon `i`'s representative point, `None` otherwise. Nothing
/// guarantees minimality or acyclicity; only nested-or-disjoint inputs give a
/// forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InclusionMapping {
    parent: Vec<Option<usize>>,
}

impl InclusionMapping {
    /// Mapping of `n` polygons, none contained.
    pub fn new(n: usize) -> Self {
        Self {
            parent: vec![None; n],
        }
    }

    pub fn set_parent(&mut self, child: usize, parent: usize) {
        assert!(
            child < self.parent.len() && parent < self.parent.len(),
            "indices ({child}, {parent}) out of range for {} polygons",
            self.parent.len()
        );
        self.parent[child] = Some(parent);
    }

    #[inline]
    pub fn parent(&self, i: usize) -> Option<usize> {
        self.parent.get(i).copied().flatten()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.parent
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.parent.iter().copied()
    }

    /// Indices of polygons without a container.
    pub fn roots(&self) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.is_none().then_some(i))
            .collect()
    }

    /// Polygons whose recorded container is `j`.
    pub fn children(&self, j: usize) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(i, p)| (*p == Some(j)).then_some(i))
            .collect()
    }

    /// Integer form with `-1` standing for "no container".
    pub fn to_signed(&self) -> Vec<i64> {
        self.parent
            .iter()
            .map(|p| p.map_or(-1, |j| j as i64))
            .collect()
    }
}

impl From<Vec<Option<usize>>> for InclusionMapping {
    fn from(parent: Vec<Option<usize>>) -> Self {
        Self { parent }
    }
}

impl fmt::Display for InclusionMapping {
    /// `[-1, 0, 1]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (k, v) in self.to_signed().iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

/// Cooperative cancellation flag shared between a solve and its caller.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Solver configuration.
#[derive(Clone, Debug, Default)]
pub struct SolveCfg {
    /// Spread the outer loop over the rayon pool. Results are identical.
    pub parallel: bool,
    /// Give up once this much wall time has elapsed.
    pub timeout: Option<Duration>,
    /// Checked once per polygon.
    pub cancel: Option<CancelToken>,
}

/// Reasons a solve stops before producing a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    Cancelled,
    DeadlineExceeded { elapsed: Duration },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Cancelled => write!(f, "inclusion solve cancelled"),
            SolveError::DeadlineExceeded { elapsed } => {
                write!(f, "inclusion solve exceeded its deadline after {elapsed:?}")
            }
        }
    }
}

impl std::error::Error for SolveError {}
