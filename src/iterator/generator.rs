use std::iter;

use crate::expression::{Expression, Operator};

/// A candidate tree paired with its already-validated value, so downstream
/// consumers never re-evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluated {
    pub expr: Expression,
    pub value: i64,
}

/// Lazily enumerate every valid expression tree whose in-order leaves are
/// exactly `leaves`.
///
/// Base case: one leaf yields the single `Leaf` tree. Otherwise, for each
/// split point the left and right slices are enumerated recursively, and for
/// each subtree pair every operator in [`Operator::ALL`] is tried; a node is
/// emitted only when [`Operator::apply`] accepts the combination, so invalid
/// subtrees are pruned as they are built and never reach the solver.
///
/// Leaf order is never changed here; reordering is the permutation driver's
/// job. Candidates are produced one at a time, keeping peak memory bounded by
/// the recursion depth rather than the combinatorial candidate count.
pub fn expressions(leaves: &[i64]) -> Box<dyn Iterator<Item = Evaluated> + '_> {
    match leaves {
        [] => Box::new(iter::empty()),
        [n] => {
            let n = *n;
            Box::new(iter::once(Evaluated {
                expr: Expression::Leaf(n),
                value: n,
            }))
        }
        _ => Box::new((1..leaves.len()).flat_map(move |split| {
            let (left_leaves, right_leaves) = leaves.split_at(split);
            expressions(left_leaves).flat_map(move |left| {
                expressions(right_leaves).flat_map(move |right| {
                    let left = left.clone();
                    Operator::ALL.into_iter().filter_map(move |op| {
                        op.apply(left.value, right.value).ok().map(|value| Evaluated {
                            expr: Expression::binary(op, left.expr.clone(), right.expr.clone()),
                            value,
                        })
                    })
                })
            })
        })),
    }
}
