use itertools::Itertools;

/// Every ordering of the input numbers, one at a time.
///
/// Emission order is whatever `itertools` produces, which is deterministic
/// for a given input; that determinism is what makes the budget cutoff and
/// early-exit boundary reproducible across runs. Duplicate inputs yield
/// duplicate orderings, no deduplication is attempted.
pub fn permutations(numbers: &[i64]) -> impl Iterator<Item = Vec<i64>> + '_ {
    numbers.iter().copied().permutations(numbers.len())
}
