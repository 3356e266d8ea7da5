//! Branch selection for f(x).
//!
//! Provides the [`Branch`] enum and the two thresholds that split the real
//! line into its three domains.

/// Lower threshold: x below this uses [`Branch::Negative`].
pub const LOWER_THRESHOLD: f64 = 0.0;

/// Upper threshold: x at or above this uses [`Branch::Series`].
pub const UPPER_THRESHOLD: f64 = 5.0;

/// Domain-conditioned formulas making up f(x).
/// - [`Branch::Negative`] : x < 0,      `sin(x²) / ln(3 + |x|)`
/// - [`Branch::Smooth`]   : 0 <= x < 5, `atan(x) * exp(cos(x)) / cbrt(1 + x²)`
/// - [`Branch::Series`]   : x >= 5,     `Σ (-1)^n x^n / (n! ln(n + 4))`, n = 0..=7
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Branch {
    Negative,
    Smooth,
    Series,
}

impl Branch {
    /// Branch that applies at `x`.
    ///
    /// NaN compares false against both thresholds and lands in
    /// [`Branch::Series`]; [`crate::function::evaluate`] rejects it before
    /// this matters.
    pub fn of(x: f64) -> Self {
        if x < LOWER_THRESHOLD {
            Branch::Negative
        } else if x < UPPER_THRESHOLD {
            Branch::Smooth
        } else {
            Branch::Series
        }
    }

    pub const fn branch_name(self) -> &'static str {
        match self {
            Branch::Negative => "negative",
            Branch::Smooth   => "smooth",
            Branch::Series   => "series",
        }
    }
}
impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.branch_name())
    }
}
