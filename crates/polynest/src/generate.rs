//! Sample polygon sets for tests, benches and `.poly` fixtures.
//!
//! - `Preset`: small hand-made scenarios (nested squares, empty input, a long
//!   diagonal of unit squares).
//! - `random_polygons`: `n` polygons of `m` integer-valued points drawn
//!   uniformly from a box. These are generally self-intersecting; they exercise
//!   solver throughput, not correctness.
//!
//! Draws are reproducible from the seed alone.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Point, Polygon};

/// Error type for generator parameters.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Hand-made scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// One 5×5 square.
    Single,
    /// 5×5 square with a 3×3 square inside.
    Multiple,
    /// A single polygon without points.
    Empty,
    /// Three nested squares, outermost first.
    Complex,
    /// 1000 unit squares along the diagonal, touching at corners.
    Large,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Single,
        Preset::Multiple,
        Preset::Empty,
        Preset::Complex,
        Preset::Large,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Single => "single",
            Preset::Multiple => "multiple",
            Preset::Empty => "empty",
            Preset::Complex => "complex",
            Preset::Large => "large",
        }
    }

    pub fn polygons(&self) -> Vec<Polygon> {
        let sq = |lo: f64, hi: f64| Polygon::from_xy(&[(lo, lo), (lo, hi), (hi, hi), (hi, lo)]);
        match self {
            Preset::Single => vec![sq(0.0, 5.0)],
            Preset::Multiple => vec![sq(0.0, 5.0), sq(1.0, 4.0)],
            Preset::Empty => vec![Polygon::default()],
            Preset::Complex => vec![sq(0.0, 5.0), sq(1.0, 4.0), sq(2.0, 3.0)],
            Preset::Large => (0..1000)
                .map(|i| {
                    let i = i as f64;
                    Polygon::from_xy(&[(i, i), (i, i + 1.0), (i + 1.0, i + 1.0), (i + 1.0, i)])
                })
                .collect(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Preset {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s.trim())
            .ok_or_else(|| GeneratorError::invalid(format!("unknown preset '{s}'")))
    }
}

/// Random polygon batch parameters.
#[derive(Clone, Copy, Debug)]
pub struct RandomCfg {
    /// Number of polygons.
    pub polygons: usize,
    /// Points per polygon.
    pub points: usize,
    /// Inclusive coordinate bounds.
    pub min: i64,
    pub max: i64,
}

impl Default for RandomCfg {
    fn default() -> Self {
        Self {
            polygons: 4000,
            points: 50,
            min: -100_000_000,
            max: 100_000_000,
        }
    }
}

impl RandomCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.min > self.max {
            return Err(GeneratorError::invalid("min <= max required"));
        }
        Ok(())
    }
}

/// Draw `cfg.polygons` polygons of `cfg.points` integer-valued points.
pub fn random_polygons(cfg: &RandomCfg, seed: u64) -> Result<Vec<Polygon>, GeneratorError> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let polys = (0..cfg.polygons)
        .map(|_| {
            let pts = (0..cfg.points)
                .map(|_| {
                    let x = rng.gen_range(cfg.min..=cfg.max);
                    let y = rng.gen_range(cfg.min..=cfg.max);
                    Point::new(x as f64, y as f64)
                })
                .collect();
            Polygon::new(pts)
        })
        .collect();
    Ok(polys)
}
