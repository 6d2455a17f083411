use log::{debug, info};

use crate::expression::Expression;
use crate::iterator::{expressions, permutations};
use crate::solver::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TIE_CAP};
use crate::solver::errors::SolverError;

/// Knobs for one search run.
///
/// `max_attempts` counts fully-evaluated root-level candidates; subtrees
/// discarded during enumeration are free. `tie_cap` bounds how many
/// candidates tied at the best distance are kept, since degenerate inputs
/// can tie almost everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_attempts: u64,
    pub tie_cap: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            tie_cap: DEFAULT_TIE_CAP,
        }
    }
}

/// One fully-evaluated expression tree together with its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub expr: Expression,
    pub value: i64,
}

/// Why the search loop stopped. Both budget exhaustion and space exhaustion
/// can surface an empty candidate set; this is how callers tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    ExactMatch,
    BudgetExhausted,
    SpaceExhausted,
}

/// Outcome of a search: every candidate tied at the smallest observed
/// distance from the target, plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub candidates: Vec<Candidate>,
    pub distance: Option<u64>,
    pub attempts: u64,
    pub stop: StopReason,
}

/// Best-match bookkeeping, owned by one `search` call for its duration.
struct SearchState {
    best_distance: Option<u64>,
    candidates: Vec<Candidate>,
    attempts: u64,
}

impl SearchState {
    fn new() -> Self {
        Self {
            best_distance: None,
            candidates: Vec::new(),
            attempts: 0,
        }
    }

    fn consider(&mut self, candidate: Candidate, distance: u64, tie_cap: usize) {
        match self.best_distance {
            Some(best) if distance > best => {}
            Some(best) if distance == best => {
                if self.candidates.len() < tie_cap {
                    self.candidates.push(candidate);
                } else {
                    debug!(
                        "Tie cap of {} reached, dropping candidate at distance {}",
                        tie_cap, distance
                    );
                }
            }
            _ => {
                self.best_distance = Some(distance);
                self.candidates.clear();
                self.candidates.push(candidate);
            }
        }
    }
}

/// Main solver: drives permutations × expression trees and tracks the
/// closest results.
pub struct ExpressionSolver {
    config: SearchConfig,
}

impl ExpressionSolver {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Search for the expressions over `numbers` closest to `target`.
    ///
    /// Every emitted candidate is already validated, so each one costs
    /// exactly one attempt. A candidate at distance zero stops the search
    /// immediately and is returned as the sole result; otherwise the run
    /// ends when the budget or the whole space is exhausted, with whatever
    /// best set has accumulated (possibly empty).
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::ZeroAttemptBudget`] when the configured budget
    /// is zero. An empty `numbers` slice is not an error; it produces an
    /// empty report.
    pub fn search(&self, numbers: &[i64], target: i64) -> Result<SearchReport, SolverError> {
        if self.config.max_attempts == 0 {
            return Err(SolverError::ZeroAttemptBudget);
        }

        info!(
            "Searching {} numbers for target {} with a budget of {} attempts",
            numbers.len(),
            target,
            self.config.max_attempts
        );

        let mut state = SearchState::new();
        let mut stop = StopReason::SpaceExhausted;

        'outer: for ordering in permutations(numbers) {
            for evaluated in expressions(&ordering) {
                state.attempts += 1;
                let distance = evaluated.value.abs_diff(target);
                let candidate = Candidate {
                    expr: evaluated.expr,
                    value: evaluated.value,
                };
                state.consider(candidate, distance, self.config.tie_cap);

                if distance == 0 {
                    stop = StopReason::ExactMatch;
                    break 'outer;
                }
                if state.attempts >= self.config.max_attempts {
                    stop = StopReason::BudgetExhausted;
                    break 'outer;
                }
            }
        }

        info!(
            "Search stopped after {} attempts: {:?}, best distance {:?}",
            state.attempts, stop, state.best_distance
        );

        Ok(SearchReport {
            candidates: state.candidates,
            distance: state.best_distance,
            attempts: state.attempts,
            stop,
        })
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}
