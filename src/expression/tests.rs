use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

#[test]
fn test_apply_basic_operations() {
    assert_eq!(Operator::Add.apply(3, 4), Ok(7));
    assert_eq!(Operator::Sub.apply(9, 4), Ok(5));
    assert_eq!(Operator::Mul.apply(3, 4), Ok(12));
    assert_eq!(Operator::Div.apply(12, 4), Ok(3));
}

#[test]
fn test_apply_division_by_zero() {
    assert_eq!(Operator::Div.apply(3, 0), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_apply_inexact_division() {
    assert_eq!(Operator::Div.apply(7, 2), Err(ExpressionError::InexactDivision));
    assert_eq!(Operator::Div.apply(1, 3), Err(ExpressionError::InexactDivision));
}

#[test]
fn test_apply_rejects_negative_results() {
    assert_eq!(Operator::Sub.apply(2, 5), Err(ExpressionError::NegativeResult));
    assert_eq!(Operator::Mul.apply(3, -5), Err(ExpressionError::NegativeResult));
    assert_eq!(Operator::Add.apply(-7, 2), Err(ExpressionError::NegativeResult));
}

#[test]
fn test_apply_zero_results_are_valid() {
    assert_eq!(Operator::Sub.apply(2, 2), Ok(0));
    assert_eq!(Operator::Mul.apply(3, 0), Ok(0));
    assert_eq!(Operator::Div.apply(0, 3), Ok(0));
}

#[test]
fn test_apply_overflow() {
    assert_eq!(
        Operator::Add.apply(i64::MAX, 1),
        Err(ExpressionError::Overflow)
    );
    assert_eq!(
        Operator::Mul.apply(i64::MAX, 2),
        Err(ExpressionError::Overflow)
    );
}

#[test]
fn test_evaluate_nested_tree() {
    // ((3 + 4) * 2) = 14
    let expr = Expression::binary(
        Operator::Mul,
        Expression::binary(Operator::Add, Expression::Leaf(3), Expression::Leaf(4)),
        Expression::Leaf(2),
    );
    assert_eq!(expr.evaluate(), Ok(14));
}

#[test]
fn test_evaluate_propagates_inner_failure() {
    // ((2 - 5) + 10): the inner subtraction goes negative
    let expr = Expression::binary(
        Operator::Add,
        Expression::binary(Operator::Sub, Expression::Leaf(2), Expression::Leaf(5)),
        Expression::Leaf(10),
    );
    assert_eq!(expr.evaluate(), Err(ExpressionError::NegativeResult));
}

#[test]
fn test_display_leaf() {
    assert_eq!(Expression::Leaf(7).to_string(), "7");
}

#[test]
fn test_display_fully_parenthesized() {
    let expr = Expression::binary(
        Operator::Mul,
        Expression::binary(Operator::Add, Expression::Leaf(3), Expression::Leaf(4)),
        Expression::Leaf(2),
    );
    assert_eq!(expr.to_string(), "((3 + 4) * 2)");
}

#[test]
fn test_in_words_rendering() {
    let expr = Expression::binary(
        Operator::Mul,
        Expression::binary(Operator::Add, Expression::Leaf(3), Expression::Leaf(4)),
        Expression::Leaf(2),
    );
    assert_eq!(expr.in_words(), "((3 plus 4) multiplied by 2)");

    let expr = Expression::binary(
        Operator::Sub,
        Expression::Leaf(9),
        Expression::binary(Operator::Div, Expression::Leaf(8), Expression::Leaf(4)),
    );
    assert_eq!(expr.in_words(), "(9 minus (8 divided by 4))");
}

#[test]
fn test_leaf_values_in_order() {
    let expr = Expression::binary(
        Operator::Mul,
        Expression::binary(Operator::Add, Expression::Leaf(3), Expression::Leaf(4)),
        Expression::Leaf(2),
    );
    assert_eq!(expr.leaf_values(), vec![3, 4, 2]);
}
