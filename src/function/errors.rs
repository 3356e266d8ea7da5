//! Evaluation error types.
//!
//! ┌ zero denominator in the logarithmic branch (x < 0)
//! ├ zero denominator in one of the series terms (x >= 5)
//! ├ non-finite input
//! └ non-finite result (overflow for very large |x|)

use thiserror::Error;

/// Failure to evaluate f(x).
///
/// Both denominator variants are guarded invariants: with the current
/// constants `ln(3 + |x|) >= ln 3` and `n! ln(n + 4) >= ln 4`, so neither
/// can be produced for finite x.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("ln(3 + |x|) = 0 is undefined at x={x}")]
    ZeroLogDenominator { x: f64 },

    #[error("series term n={n} has zero denominator n! * ln(n + 4) at x={x}")]
    ZeroSeriesDenominator { x: f64, n: u32 },

    #[error("f(x) undefined for non-finite x={x}")]
    NonFiniteInput { x: f64 },

    #[error("f(x) non-finite at x={x}, f(x)={fx}")]
    NonFiniteResult { x: f64, fx: f64 },
}

impl DomainError {
    /// The point at which evaluation failed.
    pub fn x(&self) -> f64 {
        match *self {
            DomainError::ZeroLogDenominator { x }
            | DomainError::ZeroSeriesDenominator { x, .. }
            | DomainError::NonFiniteInput { x }
            | DomainError::NonFiniteResult { x, .. } => x,
        }
    }
}
