// branch selection and errors
pub mod branch;
pub mod errors;

// f(x)
pub mod evaluator;

pub use branch::Branch;
pub use errors::DomainError;
pub use evaluator::{evaluate, evaluate_branch};
