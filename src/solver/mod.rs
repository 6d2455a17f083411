pub mod constants;
mod core;
mod errors;

pub use core::{Candidate, ExpressionSolver, SearchConfig, SearchReport, StopReason};
pub use errors::SolverError;
