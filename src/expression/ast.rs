/// The four operators a candidate expression may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Fixed trial order at every internal node; together with the split and
    /// permutation order this keeps enumeration deterministic.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            Operator::Add => "plus",
            Operator::Sub => "minus",
            Operator::Mul => "multiplied by",
            Operator::Div => "divided by",
        }
    }
}

/// An owned binary expression tree over one ordering of the input numbers.
/// The leaves of any subtree, read left to right, are a contiguous slice of
/// that ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Leaf(i64),
    Binary {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Leaf values in left-to-right order.
    pub fn leaf_values(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<i64>) {
        match self {
            Expression::Leaf(n) => out.push(*n),
            Expression::Binary { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }
}
