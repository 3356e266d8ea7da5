//! Fixed-step tabulation of f over [a, b].

use super::algorithms::Analysis;
use super::config::{check_step, valid_bounds};
use super::report::Sample;
use crate::function::{evaluate, DomainError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid step: must be finite and > 0. got {step}")]
    InvalidStep { step: f64 },

    #[error("step {step} too small to advance x across [{a}, {b}]")]
    StepTooSmall { a: f64, b: f64, step: f64 },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Lazy sequence of `(x, f(x))` samples from [`tabulate`].
///
/// x starts at `a` and advances by repeated addition of `step` while
/// `x <= b + step / 2`, so `b` itself is included despite accumulated
/// rounding. Samples come out in strictly ascending x. After the first
/// [`DomainError`] the sequence ends.
#[derive(Debug, Clone)]
pub struct Table {
    x:     f64,
    limit: f64,
    step:  f64,
    done:  bool,
}

impl Table {
    pub fn step(&self) -> f64 { self.step }

    /// Drains the table into a vector, stopping at the first error.
    pub fn collect_samples(self) -> Result<Vec<Sample>, TableError> {
        let samples: Result<Vec<Sample>, DomainError> = self.collect();
        Ok(samples?)
    }
}

impl Iterator for Table {
    type Item = Result<Sample, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.x > self.limit {
            return None;
        }
        let x = self.x;
        self.x += self.step;

        match evaluate(x) {
            Ok(y) => Some(Ok(Sample { x, y })),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Table {}

/// Tabulates f on `[a, b]` with spacing `step`.
///
/// Yields roughly `floor((b - a) / step) + 1` samples; see [`Table`].
///
/// # Errors
/// ┌ [`TableError::InvalidBounds`] - `a` or `b` non-finite, or `a >= b`.
/// ├ [`TableError::InvalidStep`]   - `step` non-finite or <= 0.
/// └ [`TableError::StepTooSmall`]  - `step` vanishes next to `a` or `b`,
///   so `x += step` would never reach the end.
///
/// Evaluation failures are reported per item by the returned iterator.
pub fn tabulate(a: f64, b: f64, step: f64) -> Result<Table, TableError> {
    if !valid_bounds(a, b) {
        return Err(TableError::InvalidBounds { a, b });
    }
    let step = check_step(step).map_err(|_| TableError::InvalidStep { step })?;

    let limit = b + step / 2.0;
    if a + step == a || limit + step == limit {
        return Err(TableError::StepTooSmall { a, b, step });
    }

    tracing::debug!(analysis = %Analysis::Table, a, b, step, "tabulating");
    Ok(Table { x: a, limit, step, done: false })
}
