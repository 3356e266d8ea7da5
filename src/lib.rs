//! Evaluation and numeric analysis of a three-branch piecewise function.
//!
//! ┌ [`function`] : f(x) itself, branch selection and [`function::DomainError`]
//! ├ [`analysis`] : derivative, extrema scan, tabulation, inverse search
//! └ [`menu`], [`cli`], [`render`] : text front end used by the binary

pub mod function;
pub mod analysis;

pub mod cli;
pub mod menu;
pub mod render;

pub use function::{evaluate, Branch, DomainError};
pub use analysis::derivative::derivative;
pub use analysis::extrema::extrema;
pub use analysis::table::tabulate;
pub use analysis::inverse::solve_for;
