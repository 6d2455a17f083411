use thiserror::Error;

/// Reasons an operator application is rejected. None of these escape the
/// enumerator; an invalid combination is simply never emitted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division does not yield an integer")]
    InexactDivision,
    #[error("Negative result")]
    NegativeResult,
    #[error("Arithmetic overflow")]
    Overflow,
}
