//! Central finite-difference estimate of f'(x).

use super::algorithms::Analysis;
use super::config::check_step;
use super::errors::ConfigError;
use crate::function::{evaluate, DomainError};

/// Derivative configuration.
///
/// # Defaults
/// └ DEFAULT_STEP - half-width `h` of the difference stencil
///
/// # Validation
/// └ `h` finite and > 0, checked in [`DerivativeCfg::set_step`]
#[derive(Debug, Copy, Clone)]
pub struct DerivativeCfg {
    step: f64,
}
impl DerivativeCfg {
    pub const DEFAULT_STEP: f64 = 1e-6;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_step(mut self, v: f64) -> Result<Self, ConfigError> {
        self.step = check_step(v)?;
        Ok(self)
    }

    #[inline] #[must_use] pub fn step(&self) -> f64 { self.step }
}

impl Default for DerivativeCfg {
    fn default() -> Self {
        Self { step: Self::DEFAULT_STEP }
    }
}

/// Estimates f'(x) as `(f(x + h) - f(x - h)) / 2h` with `h = 1e-6`.
///
/// No special handling at the branch boundaries x = 0 and x = 5, where the
/// stencil straddles two formulas and the estimate is correspondingly rough.
///
/// # Errors
/// └ [`DomainError`] from either evaluation.
pub fn derivative(x: f64) -> Result<f64, DomainError> {
    derivative_with(x, &DerivativeCfg::default())
}

/// [`derivative`] with a custom stencil half-width.
pub fn derivative_with(x: f64, cfg: &DerivativeCfg) -> Result<f64, DomainError> {
    let h  = cfg.step();
    let fp = evaluate(x + h)?;
    let fm = evaluate(x - h)?;
    let d  = (fp - fm) / (2.0 * h);

    tracing::trace!(analysis = %Analysis::Derivative, x, h, d, "derivative estimated");
    Ok(d)
}
