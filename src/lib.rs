//! numbers-round - closest-expression search for a numbers round puzzle
//!
//! Given a multiset of integers and a target, this library searches every
//! ordering, parenthesization and operator assignment that combines all the
//! numbers exactly once with the four basic operations, and reports the
//! expressions whose value lands closest to the target. Division must be
//! exact and no intermediate value may go negative; the work is bounded by
//! an attempt budget and the search stops early on an exact match.

pub mod expression;
pub mod iterator;
pub mod solver;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use solver::{Candidate, ExpressionSolver, SearchConfig, SearchReport, SolverError, StopReason};

/// Find the expressions over `numbers` whose value is closest to `target`.
///
/// This is a convenience function that runs a default-configured solver
/// (100 000 attempt budget).
///
/// # Errors
///
/// Cannot fail with the default configuration; the `Result` mirrors
/// [`ExpressionSolver::search`], which rejects a zero attempt budget.
///
/// # Examples
///
/// ```
/// use numbers_round::find_closest;
///
/// match find_closest(&[3, 4, 2], 14) {
///     Ok(report) => {
///         for candidate in &report.candidates {
///             println!("{} = {}", candidate.expr, candidate.value);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_closest(numbers: &[i64], target: i64) -> Result<SearchReport, SolverError> {
    ExpressionSolver::new().search(numbers, target)
}
