use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

impl Operator {
    /// Apply the operator to two already-validated operands.
    ///
    /// # Errors
    ///
    /// Returns an error when the combination is arithmetically invalid:
    /// - Division by zero
    /// - Division with a remainder (fractional results are rejected, not rounded)
    /// - A negative result, from any operator
    /// - Overflow of `i64`
    pub fn apply(self, left: i64, right: i64) -> Result<i64, ExpressionError> {
        let result = match self {
            Operator::Add => left.checked_add(right).ok_or(ExpressionError::Overflow)?,
            Operator::Sub => left.checked_sub(right).ok_or(ExpressionError::Overflow)?,
            Operator::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow)?,
            Operator::Div => {
                if right == 0 {
                    debug!("Division by zero attempted: {} / 0", left);
                    return Err(ExpressionError::DivisionByZero);
                }
                if left % right != 0 {
                    debug!("Inexact division rejected: {} / {}", left, right);
                    return Err(ExpressionError::InexactDivision);
                }
                left / right
            }
        };

        if result < 0 {
            debug!("Negative result rejected: {} {} {}", left, self.symbol(), right);
            return Err(ExpressionError::NegativeResult);
        }

        Ok(result)
    }
}

impl Expression {
    /// Recompute the value of the tree bottom-up.
    ///
    /// Trees emitted by the enumerator are validated during construction, so
    /// this exists for re-checking candidates (and for tests); it applies the
    /// same constraints at every node.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ExpressionError`] hit by any internal node.
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        match self {
            Expression::Leaf(n) => Ok(*n),
            Expression::Binary { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                op.apply(left, right)
            }
        }
    }
}
