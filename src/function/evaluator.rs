//! Evaluation of the piecewise function f(x).

use super::branch::Branch;
use super::errors::DomainError;

/// Highest power in the series branch (terms n = 0..=SERIES_DEGREE).
pub const SERIES_DEGREE: u32 = 7;

/// Offset inside `ln(LOG_OFFSET + |x|)` for the negative branch.
const LOG_OFFSET: f64 = 3.0;

/// Offset inside `ln(n + SERIES_LOG_OFFSET)` for the series branch.
const SERIES_LOG_OFFSET: f64 = 4.0;

/// Evaluates f(x).
///
/// # Errors
/// ┌ [`DomainError::NonFiniteInput`]        - `x` is NaN or infinite.
/// ├ [`DomainError::NonFiniteResult`]       - overflow, e.g. `x²` in the negative
/// │                                          branch or `x^n` in the series.
/// ├ [`DomainError::ZeroLogDenominator`]    - guarded, unreachable for finite x.
/// └ [`DomainError::ZeroSeriesDenominator`] - guarded, unreachable for finite x.
pub fn evaluate(x: f64) -> Result<f64, DomainError> {
    if !x.is_finite() {
        return Err(DomainError::NonFiniteInput { x });
    }
    let fx = evaluate_branch(Branch::of(x), x)?;
    if !fx.is_finite() {
        return Err(DomainError::NonFiniteResult { x, fx });
    }
    Ok(fx)
}

/// Evaluates the formula of `branch` at `x` without checking that `x`
/// belongs to that branch's domain.
pub fn evaluate_branch(branch: Branch, x: f64) -> Result<f64, DomainError> {
    match branch {
        Branch::Negative => negative(x),
        Branch::Smooth   => Ok(smooth(x)),
        Branch::Series   => series(x),
    }
}

/// `sin(x²) / ln(3 + |x|)`
fn negative(x: f64) -> Result<f64, DomainError> {
    let denom = (LOG_OFFSET + x.abs()).ln();
    if denom == 0.0 {
        return Err(DomainError::ZeroLogDenominator { x });
    }
    Ok((x * x).sin() / denom)
}

/// `atan(x) * exp(cos(x)) / cbrt(1 + x²)`; the denominator is >= 1.
fn smooth(x: f64) -> f64 {
    x.atan() * x.cos().exp() / (1.0 + x * x).cbrt()
}

/// `Σ_{n=0}^{7} (-1)^n x^n / (n! ln(n + 4))`
fn series(x: f64) -> Result<f64, DomainError> {
    let mut sum       = 0.0;
    let mut factorial = 1.0;
    for n in 0..=SERIES_DEGREE {
        if n > 0 {
            factorial *= f64::from(n);
        }
        let denom = factorial * (f64::from(n) + SERIES_LOG_OFFSET).ln();
        if denom == 0.0 {
            return Err(DomainError::ZeroSeriesDenominator { x, n });
        }
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        sum += sign * x.powi(n as i32) / denom;
    }
    Ok(sum)
}
