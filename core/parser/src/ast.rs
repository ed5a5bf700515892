//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for additive expressions.
//! CONTEXT: The parser can either fold tokens straight into a number or
//! build this tree. Trees from the parser are always left-nested, so
//! "1 - 2 - 3" becomes ((1 - 2) - 3).

/// Represents a parsed expression.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    /// A number literal.
    Literal(f64),

    /// A binary operation: left op right (e.g., 5 + 3).
    BinaryOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },
}

/// Binary operators. Both share one precedence level and group left to right.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
}

impl BinaryOperator {
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
        }
    }
}

impl Expression {
    /// Computes the value of the tree.
    ///
    /// Walks down the left spine iteratively, then applies the operators
    /// bottom-up. Parser-built trees are left-nested, so long chains never
    /// recurse; a right-nested tree recurses once per level on the right.
    pub fn evaluate(&self) -> f64 {
        let mut pending = Vec::new();
        let mut node = self;

        let mut acc = loop {
            match node {
                Expression::Literal(n) => break *n,
                Expression::BinaryOp { left, op, right } => {
                    pending.push((*op, right.as_ref()));
                    node = left.as_ref();
                }
            }
        };

        for (op, right) in pending.into_iter().rev() {
            acc = op.apply(acc, right.evaluate());
        }

        acc
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(n) => write!(f, "{}", n),
            Expression::BinaryOp { left, op, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
