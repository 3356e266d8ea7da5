//! Analysis error types.
//!
//! ┌ [`ConfigError`] : invalid configuration values
//! │   ├ non-positive or non-finite step sizes
//! │   ├ zero grid resolution
//! │   └ invalid tolerance / iteration cap
//! │
//! └ Analysis-specific errors live next to their routine and wrap
//!   [`ConfigError`] and [`crate::function::DomainError`]:
//!     ├ [`crate::analysis::extrema::ExtremaError`]
//!     ├ [`crate::analysis::table::TableError`]
//!     └ [`crate::analysis::inverse::SolveError`]

use thiserror::Error;

/// Configuration errors shared by every analysis config.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid step: must be finite and > 0. got {got}")]
    InvalidStep { got: f64 },

    #[error("invalid steps: grid resolution must be >= 1. got {got}")]
    InvalidSteps { got: usize },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
