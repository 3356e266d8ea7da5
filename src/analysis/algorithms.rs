//! Analysis definitions.
//!
//! Provides the [`Analysis`] enum naming every routine built on top of
//! [`crate::function::evaluate`]. The name is stamped into reports and log
//! events.

/// Analyses of f(x).
/// - [`Analysis::Derivative`] central finite difference
/// - [`Analysis::Extrema`]    uniform-grid min/max scan
/// - [`Analysis::Table`]      fixed-step tabulation
/// - [`Analysis::Bisection`]  inverse search for f(x) ≈ Y
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Analysis {
    Derivative,
    Extrema,
    Table,
    Bisection,
}

impl Analysis {
    pub const fn analysis_name(self) -> &'static str {
        match self {
            Analysis::Derivative => "central_difference",
            Analysis::Extrema    => "grid_extrema",
            Analysis::Table      => "table",
            Analysis::Bisection  => "bisection",
        }
    }
}
impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.analysis_name())
    }
}
