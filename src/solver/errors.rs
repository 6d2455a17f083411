use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    #[error("Attempt budget must be a positive integer")]
    ZeroAttemptBudget,
}
