//! Shared validation for analysis configurations.
//!
//! Every config struct ([`DerivativeCfg`], [`ExtremaCfg`], [`SolveCfg`])
//! validates in its setters through these helpers, so a constructed config
//! is always usable.
//!
//! [`DerivativeCfg`]: crate::analysis::derivative::DerivativeCfg
//! [`ExtremaCfg`]: crate::analysis::extrema::ExtremaCfg
//! [`SolveCfg`]: crate::analysis::inverse::SolveCfg

use super::errors::ConfigError;

/// Step sizes must be finite and > 0.
pub(crate) fn check_step(v: f64) -> Result<f64, ConfigError> {
    if !v.is_finite() || v <= 0.0 {
        tracing::debug!(got = v, "rejected step");
        return Err(ConfigError::InvalidStep { got: v });
    }
    Ok(v)
}

/// Grid resolutions must be >= 1.
pub(crate) fn check_steps(v: usize) -> Result<usize, ConfigError> {
    if v == 0 {
        tracing::debug!(got = v, "rejected grid resolution");
        return Err(ConfigError::InvalidSteps { got: v });
    }
    Ok(v)
}

/// Tolerances must be finite and > 0.
pub(crate) fn check_tolerance(v: f64) -> Result<f64, ConfigError> {
    if !v.is_finite() || v <= 0.0 {
        tracing::debug!(got = v, "rejected tolerance");
        return Err(ConfigError::InvalidTolerance { got: v });
    }
    Ok(v)
}

/// Iteration caps must be >= 1.
pub(crate) fn check_max_iter(v: usize) -> Result<usize, ConfigError> {
    if v == 0 {
        tracing::debug!(got = v, "rejected max_iter");
        return Err(ConfigError::InvalidMaxIter { got: v });
    }
    Ok(v)
}

/// `true` if `[a, b]` is a proper finite interval.
#[inline]
pub(crate) fn valid_bounds(a: f64, b: f64) -> bool {
    a.is_finite() && b.is_finite() && a < b
}
