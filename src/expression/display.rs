use std::fmt;

use crate::expression::ast::Expression;

/// Fully parenthesized infix form, e.g. `((3 + 4) * 2)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Leaf(n) => write!(f, "{}", n),
            Expression::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
        }
    }
}

impl Expression {
    /// The same shape as `Display`, with each operator spelled out as a word,
    /// e.g. `((3 plus 4) multiplied by 2)`.
    pub fn in_words(&self) -> String {
        match self {
            Expression::Leaf(n) => n.to_string(),
            Expression::Binary { op, left, right } => {
                format!("({} {} {})", left.in_words(), op.word(), right.in_words())
            }
        }
    }
}
