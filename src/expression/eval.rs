use std::collections::HashMap;
use std::f64::consts::E;

use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

/// Variable bindings supplied to `eval`.
pub type Bindings = HashMap<String, f64>;

/// Negate an already-evaluated operand. There is no negation node in
/// the expression set, so a symbolic operand becomes `-1 * expr`.
fn negate(expr: Expression) -> Expression {
    match expr {
        Expression::Constant(n) => Expression::Constant(-n),
        other => Expression::Product(Box::new(Expression::Constant(-1.0)), Box::new(other)),
    }
}

fn recompose(
    node: fn(Box<Expression>, Box<Expression>) -> Expression,
    raw: fn(f64, f64) -> f64,
    left: Expression,
    right: Expression,
) -> Expression {
    match (left.as_number(), right.as_number()) {
        (Some(l), Some(r)) => Expression::Constant(raw(l, r)),
        _ => node(Box::new(left), Box::new(right)),
    }
}

impl Expression {
    /// Partially evaluate this expression under `bindings`.
    ///
    /// Bound variables are substituted, constant-only subtrees fold to a
    /// single `Constant`, and algebraic identities (`x + 0`, `1 * x`,
    /// `x^1`, ...) are eliminated. Subtrees that still depend on an
    /// unbound variable are returned reduced but symbolic. Children
    /// evaluate left first, then right, and the identity shortcuts apply
    /// before any raw arithmetic.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - a denominator evaluates to numeric zero
    /// - a logarithm base does not resolve to a number
    pub fn eval(&self, bindings: &Bindings) -> Result<Expression, ExpressionError> {
        match self {
            Expression::Constant(n) => Ok(Expression::Constant(*n)),
            Expression::Variable(name) => Ok(match bindings.get(name) {
                Some(val) => Expression::Constant(*val),
                None => self.clone(),
            }),
            Expression::Sum(l, r) => {
                let l = l.eval(bindings)?;
                let r = r.eval(bindings)?;
                if l.equals_scalar(0.0) {
                    Ok(r)
                } else if r.equals_scalar(0.0) {
                    Ok(l)
                } else {
                    Ok(recompose(Expression::Sum, |a, b| a + b, l, r))
                }
            }
            Expression::Difference(l, r) => {
                let l = l.eval(bindings)?;
                let r = r.eval(bindings)?;
                if l.equals_scalar(0.0) {
                    Ok(negate(r))
                } else if r.equals_scalar(0.0) {
                    Ok(l)
                } else {
                    Ok(recompose(Expression::Difference, |a, b| a - b, l, r))
                }
            }
            Expression::Product(l, r) => {
                let l = l.eval(bindings)?;
                let r = r.eval(bindings)?;
                if l.equals_scalar(0.0) || r.equals_scalar(0.0) {
                    Ok(Expression::Constant(0.0))
                } else if l.equals_scalar(1.0) {
                    Ok(r)
                } else if r.equals_scalar(1.0) {
                    Ok(l)
                } else {
                    Ok(recompose(Expression::Product, |a, b| a * b, l, r))
                }
            }
            Expression::Division(l, r) => {
                let l = l.eval(bindings)?;
                let r = r.eval(bindings)?;
                if l.equals_scalar(0.0) {
                    Ok(Expression::Constant(0.0))
                } else if r.equals_scalar(0.0) {
                    debug!("division by zero in {}", self);
                    Err(ExpressionError::DivisionByZero)
                } else if r.equals_scalar(1.0) {
                    Ok(l)
                } else {
                    Ok(recompose(Expression::Division, |a, b| a / b, l, r))
                }
            }
            Expression::Power(base, exponent) => {
                let base = base.eval(bindings)?;
                let exponent = exponent.eval(bindings)?;
                if exponent.equals_scalar(0.0) {
                    Ok(Expression::Constant(1.0))
                } else if exponent.equals_scalar(1.0) {
                    Ok(base)
                } else if base.equals_scalar(0.0) || base.equals_scalar(1.0) {
                    Ok(base)
                } else {
                    Ok(recompose(Expression::Power, f64::powf, base, exponent))
                }
            }
            Expression::Logarithm(base, antilog) => {
                let base = match base {
                    None => E,
                    Some(b) => {
                        b.eval(bindings)?.as_number().ok_or_else(|| {
                            debug!("logarithm base did not resolve to a number in {}", self);
                            ExpressionError::UnsupportedOperation(
                                "logarithm with a symbolic base".to_string(),
                            )
                        })?
                    }
                };
                let antilog = antilog.eval(bindings)?;
                if antilog.equals_scalar(1.0) {
                    Ok(Expression::Constant(0.0))
                } else if antilog.equals_scalar(base) {
                    Ok(Expression::Constant(1.0))
                } else if let Some(a) = antilog.as_number() {
                    Ok(Expression::Constant(a.log(base)))
                } else if base == E {
                    Ok(Expression::Logarithm(None, Box::new(antilog)))
                } else {
                    Ok(Expression::Logarithm(
                        Some(Box::new(Expression::Constant(base))),
                        Box::new(antilog),
                    ))
                }
            }
        }
    }

    /// Force an evaluation pass with no bindings.
    ///
    /// Folds constant-only subtrees and eliminates identities, collapsing
    /// freshly built expressions such as `1*dx + 0*dy` down to `1` while
    /// leaving variable-dependent subtrees symbolic. Idempotent.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Expression::eval`].
    pub fn simplify(&self) -> Result<Expression, ExpressionError> {
        self.eval(&Bindings::new())
    }
}
