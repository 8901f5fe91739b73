//! Symdiff - A symbolic expression engine
//!
//! This library provides algebraic expression trees built by programmatic
//! composition, recursive partial evaluation with constant folding and
//! algebraic-identity elimination, symbolic differentiation with a
//! closed-form rule per node kind, and a minimal-parenthesization infix
//! renderer. A small probability layer consumes expressions as density
//! functions.

pub mod expression;
pub mod random;

// Re-export the main public API
pub use expression::{add, div, ln, log, mul, pow, sub};
pub use expression::{Bindings, Expression, ExpressionError};
pub use random::{RandomVariable, RandomVariableError, Range, Uniform};

/// Partially evaluate `expr` under `bindings`.
///
/// Bound variables are substituted and constant-only subtrees fold down
/// to a single constant; subtrees depending on unbound variables stay
/// symbolic.
///
/// # Errors
///
/// Returns an error on division by a zero denominator or a logarithm
/// whose base does not resolve to a number.
///
/// # Examples
///
/// ```
/// use symdiff::{add, evaluate, Bindings, Expression};
///
/// let mut bindings = Bindings::new();
/// bindings.insert("x".to_string(), 5.0);
///
/// let expr = add(Expression::variable("x"), 0.0);
/// assert_eq!(evaluate(&expr, &bindings), Ok(Expression::Constant(5.0)));
/// ```
pub fn evaluate(expr: &Expression, bindings: &Bindings) -> Result<Expression, ExpressionError> {
    expr.eval(bindings)
}

/// Differentiate `expr` with respect to the variable named `variable`,
/// simplifying the result.
///
/// # Errors
///
/// Returns an error when a logarithm base does not resolve to a number,
/// or when simplifying the derivative hits a division by zero.
///
/// # Examples
///
/// ```
/// use symdiff::{differentiate, mul, Expression};
///
/// let expr = mul(2.0, Expression::variable("x"));
/// assert_eq!(differentiate(&expr, "x"), Ok(Expression::Constant(2.0)));
/// ```
pub fn differentiate(expr: &Expression, variable: &str) -> Result<Expression, ExpressionError> {
    expr.diff(variable)
}
