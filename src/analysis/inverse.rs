//! Inverse search: find x in [a, b] with f(x) ≈ Y by bisection.

use super::algorithms::Analysis;
use super::config::{check_max_iter, check_tolerance, valid_bounds};
use super::errors::ConfigError;
use super::report::{Outcome, SolveReport};
use crate::function::{evaluate, DomainError};
use thiserror::Error;

const ALGORITHM: &str = Analysis::Bisection.analysis_name();

#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid target: Y must be finite. got {target}")]
    InvalidTarget { target: f64 },

    #[error("evaluation failed at iteration {iteration}: {source}")]
    Domain { iteration: usize, source: DomainError },
}

/// Inverse search configuration.
///
/// # Defaults
///
/// ┌ DEFAULT_TOLERANCE - stop once `|f(mid) - Y| < tolerance`
/// └ DEFAULT_MAX_ITER  - bisection steps before giving up
///
/// # Validation
/// ├ `tolerance` finite and > 0, checked in [`SolveCfg::set_tolerance`]
/// └ `max_iter` >= 1, checked in [`SolveCfg::set_max_iter`]
#[derive(Debug, Copy, Clone)]
pub struct SolveCfg {
    tolerance: f64,
    max_iter:  usize,
}
impl SolveCfg {
    pub const DEFAULT_TOLERANCE: f64   = 1e-6;
    pub const DEFAULT_MAX_ITER:  usize = 100;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_tolerance(mut self, v: f64) -> Result<Self, ConfigError> {
        self.tolerance = check_tolerance(v)?;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        self.max_iter = check_max_iter(v)?;
        Ok(self)
    }

    #[inline] #[must_use] pub fn tolerance(&self) -> f64   { self.tolerance }
    #[inline] #[must_use] pub fn max_iter(&self)  -> usize { self.max_iter }
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iter:  Self::DEFAULT_MAX_ITER,
        }
    }
}

/// Searches `[a, b]` for x with `|f(x) - target| < 1e-6`, at most 100
/// bisection steps.
///
/// Each step halves the bracket: with `g(x) = f(x) - target`, the right end
/// moves to the midpoint when `g(a) * g(mid) < 0`, otherwise the left end
/// does. Only the midpoint is tested against the tolerance.
///
/// The search assumes `g` changes sign once on `[a, b]`. When it does not,
/// the loop still runs to the iteration cap and the report comes back
/// [`Outcome::NotConverged`] with `bracketed == false`; the returned x is
/// then only the last midpoint tried.
///
/// # Errors
/// ┌ [`SolveError::InvalidBounds`] - `a` or `b` non-finite, or `a >= b`.
/// ├ [`SolveError::InvalidTarget`] - `target` non-finite.
/// └ [`SolveError::Domain`]        - f failed; carries the iteration (0 = endpoints).
pub fn solve_for(a: f64, b: f64, target: f64) -> Result<SolveReport, SolveError> {
    solve_for_with(a, b, target, &SolveCfg::default())
}

/// [`solve_for`] driven by a [`SolveCfg`].
pub fn solve_for_with(
    mut a: f64,
    mut b: f64,
    target: f64,
    cfg: &SolveCfg,
) -> Result<SolveReport, SolveError> {
    if !valid_bounds(a, b) {
        return Err(SolveError::InvalidBounds { a, b });
    }
    if !target.is_finite() {
        return Err(SolveError::InvalidTarget { target });
    }

    let tolerance = cfg.tolerance();
    let max_iter  = cfg.max_iter();

    let mut evaluations = 0;
    let mut eval = |x: f64, iteration: usize| -> Result<f64, SolveError> {
        evaluations += 1;
        evaluate(x).map_err(|source| SolveError::Domain { iteration, source })
    };

    // f is pure, so g(a) = f(a) - Y is cached and refreshed only when `a` moves
    let fa     = eval(a, 0)?;
    let mut ga = fa - target;
    let gb     = eval(b, 0)? - target;
    let bracketed = ga * gb < 0.0;

    let mut mid = a;
    let mut fm  = fa;
    let mut gm  = ga;
    let mut outcome    = Outcome::NotConverged;
    let mut iterations = 0;

    for iter in 1..=max_iter {
        iterations = iter;
        mid = 0.5 * (a + b);
        fm  = eval(mid, iter)?;
        gm  = fm - target;

        if gm.abs() < tolerance {
            outcome = Outcome::Converged;
            break;
        }

        if ga * gm < 0.0 {
            b = mid;
        } else {
            a  = mid;
            ga = gm;
        }
    }

    match outcome {
        Outcome::Converged => tracing::debug!(
            analysis = ALGORITHM, x = mid, target, iterations, "inverse search converged"
        ),
        Outcome::NotConverged => tracing::debug!(
            analysis = ALGORITHM, x = mid, target, iterations, bracketed,
            residual = gm.abs(), "inverse search hit iteration limit"
        ),
    }

    Ok(SolveReport {
        x              : mid,
        fx             : fm,
        target,
        outcome,
        bracketed,
        iterations,
        evaluations,
        left           : a,
        right          : b,
        algorithm_name : ALGORITHM,
    })
}
