// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub(crate) mod config;

// analyses built on `function::evaluate`
pub mod derivative;
pub mod extrema;
pub mod table;
pub mod inverse;
