//! Inclusion solver: which polygon encloses which.
//!
//! Purpose
//! - Compose a point-in-polygon strategy over all ordered pairs and record,
//!   for each polygon, the first other polygon found to contain it.
//!
//! Semantics kept on purpose
//! - One representative point (the first vertex) stands for the whole polygon,
//!   so inputs must be nested or disjoint, never partially overlapping.
//! - First match wins in ascending index order. The recorded container is not
//!   necessarily the innermost one: with an outer-first ordering of three
//!   nested squares the innermost maps to the outermost.

mod solve;
mod types;

pub use solve::{solve, solve_with_method};
pub use types::{CancelToken, InclusionMapping, SolveCfg, SolveError};

#[cfg(test)]
mod tests;
