//! Result types returned by the analyses.
//!
//! [`Sample`]        : one `(x, f(x))` pair
//! [`ExtremaReport`] : grid minimum/maximum plus scan metadata
//! [`SolveReport`]   : inverse-search estimate, [`Outcome`] and metadata

/// One point of f, `y = f(x)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Summary of a grid extrema scan.
///
/// [`ExtremaReport`]
/// - `x_min`, `f_min`   : first grid point attaining the smallest value
/// - `x_max`, `f_max`   : first grid point attaining the largest value
/// - `samples`          : grid points evaluated (`steps + 1`)
/// - `grid_step`        : spacing `(b - a) / steps`
/// - `algorithm_name`   : `"grid_extrema"`
///
/// The extrema are exact only on the grid; between grid points f may go
/// beyond them by an amount bounded by the grid spacing and f's slope.
#[derive(Debug, Copy, Clone)]
pub struct ExtremaReport {
    pub x_min          : f64,
    pub f_min          : f64,
    pub x_max          : f64,
    pub f_max          : f64,
    pub samples        : usize,
    pub grid_step      : f64,
    pub algorithm_name : &'static str,
}

impl ExtremaReport {
    pub fn min(&self) -> Sample {
        Sample { x: self.x_min, y: self.f_min }
    }

    pub fn max(&self) -> Sample {
        Sample { x: self.x_max, y: self.f_max }
    }
}

/// Whether the inverse search met its tolerance.
/// - [`Outcome::Converged`]    : `|f(x) - Y| < tol` at the returned x
/// - [`Outcome::NotConverged`] : iteration cap reached; x is the last midpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Converged,
    NotConverged,
}

/// Final report of the inverse search.
///
/// [`SolveReport`]
/// - `x`              : last midpoint, the estimate for f(x) ≈ `target`
/// - `fx`             : f(`x`)
/// - `target`         : requested value Y
/// - `outcome`        : [`Outcome`]
/// - `bracketed`      : `f(a) - Y` and `f(b) - Y` had opposite signs initially
/// - `iterations`     : bisection steps performed
/// - `evaluations`    : calls to f
/// - `left`, `right`  : final bracket
/// - `algorithm_name` : `"bisection"`
#[derive(Debug, Copy, Clone)]
pub struct SolveReport {
    pub x              : f64,
    pub fx             : f64,
    pub target         : f64,
    pub outcome        : Outcome,
    pub bracketed      : bool,
    pub iterations     : usize,
    pub evaluations    : usize,
    pub left           : f64,
    pub right          : f64,
    pub algorithm_name : &'static str,
}

impl SolveReport {
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }

    /// `|f(x) - Y|`
    pub fn residual(&self) -> f64 {
        (self.fx - self.target).abs()
    }
}
