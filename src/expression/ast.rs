/// An immutable algebraic expression tree.
///
/// Every operation on an expression (`eval`, `diff`, arithmetic
/// composition) returns a new tree; existing nodes are never mutated.
/// Each composite node exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A numeric leaf.
    Constant(f64),
    /// A named leaf, resolved (or not) at evaluation time.
    Variable(String),
    Sum(Box<Expression>, Box<Expression>),
    Difference(Box<Expression>, Box<Expression>),
    Product(Box<Expression>, Box<Expression>),
    Division(Box<Expression>, Box<Expression>),
    /// `Power(base, exponent)`.
    Power(Box<Expression>, Box<Expression>),
    /// `Logarithm(base, antilog)`; a `None` base means the natural log.
    Logarithm(Option<Box<Expression>>, Box<Expression>),
}

impl Expression {
    /// Create a `Variable` leaf.
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    /// The wrapped number, if this expression is fully folded.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expression::Constant(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this node is an operator (composite) rather than a leaf.
    pub fn is_operator(&self) -> bool {
        !matches!(self, Expression::Constant(_) | Expression::Variable(_))
    }

    /// Whether this expression equals a raw number.
    ///
    /// Only a `Constant` wrapping `n` does; in particular a `Variable`
    /// never equals a number. Used at every identity-shortcut site in
    /// the evaluator so raw numbers and wrapped constants compare
    /// uniformly.
    pub fn equals_scalar(&self, n: f64) -> bool {
        matches!(self, Expression::Constant(v) if *v == n)
    }
}
