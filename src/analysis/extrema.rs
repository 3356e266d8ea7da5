//! Grid-sampled minimum and maximum of f on [a, b].

use super::algorithms::Analysis;
use super::config::{check_steps, valid_bounds};
use super::errors::ConfigError;
use super::report::ExtremaReport;
use crate::function::{evaluate, DomainError};
use thiserror::Error;

const ALGORITHM: &str = Analysis::Extrema.analysis_name();

#[derive(Debug, Error)]
pub enum ExtremaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("interval too wide: b - a overflows for [{a}, {b}]")]
    IntervalTooWide { a: f64, b: f64 },
}

/// Extrema scan configuration.
///
/// # Defaults
/// └ DEFAULT_STEPS - number of equal sub-intervals of [a, b]
///
/// # Validation
/// └ `steps` >= 1, checked in [`ExtremaCfg::set_steps`]
#[derive(Debug, Copy, Clone)]
pub struct ExtremaCfg {
    steps: usize,
}
impl ExtremaCfg {
    pub const DEFAULT_STEPS: usize = 1000;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_steps(mut self, v: usize) -> Result<Self, ConfigError> {
        self.steps = check_steps(v)?;
        Ok(self)
    }

    #[inline] #[must_use] pub fn steps(&self) -> usize { self.steps }
}

impl Default for ExtremaCfg {
    fn default() -> Self {
        Self { steps: Self::DEFAULT_STEPS }
    }
}

/// Approximates the minimum and maximum of f on `[a, b]` by sampling
/// `a + i * (b - a) / steps` for `i = 0..=steps`.
///
/// Ties keep the earliest grid point. The result is exact on the grid only:
/// refining `steps` can lower `f_min` and raise `f_max`, never the reverse,
/// as long as the coarse grid is contained in the fine one.
///
/// # Errors
/// ┌ [`ExtremaError::InvalidBounds`] - `a` or `b` non-finite, or `a >= b`.
/// ├ [`ExtremaError::IntervalTooWide`] - `b - a` is not representable.
/// ├ [`ExtremaError::Config`]        - `steps == 0`.
/// └ [`ExtremaError::Domain`]        - f failed at a grid point; the error carries that x.
pub fn extrema(a: f64, b: f64, steps: usize) -> Result<ExtremaReport, ExtremaError> {
    let cfg = ExtremaCfg::new().set_steps(steps)?;
    extrema_with(a, b, &cfg)
}

/// [`extrema`] driven by an [`ExtremaCfg`].
pub fn extrema_with(a: f64, b: f64, cfg: &ExtremaCfg) -> Result<ExtremaReport, ExtremaError> {
    if !valid_bounds(a, b) {
        return Err(ExtremaError::InvalidBounds { a, b });
    }
    if !(b - a).is_finite() {
        return Err(ExtremaError::IntervalTooWide { a, b });
    }

    let steps     = cfg.steps();
    let grid_step = (b - a) / steps as f64;

    let fa = evaluate(a)?;
    let (mut x_min, mut f_min) = (a, fa);
    let (mut x_max, mut f_max) = (a, fa);

    // i = 0 is `a` again; kept so the scan visits exactly steps + 1 points.
    // `min(b)` stops rounding in the last product from stepping past b
    for i in 0..=steps {
        let x = (a + i as f64 * grid_step).min(b);
        let y = evaluate(x)?;
        if y < f_min { f_min = y; x_min = x; }
        if y > f_max { f_max = y; x_max = x; }
    }

    tracing::debug!(
        analysis = ALGORITHM, a, b, steps, x_min, f_min, x_max, f_max,
        "extrema scan finished"
    );

    Ok(ExtremaReport {
        x_min,
        f_min,
        x_max,
        f_max,
        samples        : steps + 1,
        grid_step,
        algorithm_name : ALGORITHM,
    })
}
