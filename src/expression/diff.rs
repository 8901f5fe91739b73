use std::f64::consts::E;

use log::debug;

use crate::expression::ast::Expression;
use crate::expression::build::{add, div, ln, mul, sub};
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Symbolic derivative of this expression with respect to the
    /// variable named `wrt`.
    ///
    /// Closed-form rule per node kind; the generalized exponential rule
    /// `(f^g)' = f^g * (g'*ln(f) + g*f'/f)` covers constant exponents,
    /// constant bases, and the fully variable case alike. The result is
    /// passed through [`Expression::simplify`] before being returned.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - a logarithm base does not resolve to a number (the base is
    ///   treated as fixed during differentiation)
    /// - simplifying the derivative hits a division by zero
    pub fn diff(&self, wrt: &str) -> Result<Expression, ExpressionError> {
        let derivative = match self {
            Expression::Constant(_) => Expression::Constant(0.0),
            Expression::Variable(name) => {
                Expression::Constant(if name == wrt { 1.0 } else { 0.0 })
            }
            // Linearity: recurse both sides, recombine with the same operator.
            Expression::Sum(l, r) => add(l.diff(wrt)?, r.diff(wrt)?),
            Expression::Difference(l, r) => sub(l.diff(wrt)?, r.diff(wrt)?),
            // Product rule.
            Expression::Product(l, r) => add(
                mul((**l).clone(), r.diff(wrt)?),
                mul(l.diff(wrt)?, (**r).clone()),
            ),
            // Quotient rule.
            Expression::Division(l, r) => div(
                sub(
                    mul((**r).clone(), l.diff(wrt)?),
                    mul((**l).clone(), r.diff(wrt)?),
                ),
                mul((**r).clone(), (**r).clone()),
            ),
            // y = f^g  =>  y' = y * (g'*ln(f) + g*f'/f)
            Expression::Power(base, exponent) => mul(
                self.clone(),
                add(
                    mul(exponent.diff(wrt)?, ln((**base).clone())),
                    div(
                        mul((**exponent).clone(), base.diff(wrt)?),
                        (**base).clone(),
                    ),
                ),
            ),
            // d/dx log_b(u) = u' / (ln(b) * u), with b held fixed.
            Expression::Logarithm(base, antilog) => {
                let base = match base {
                    None => E,
                    Some(b) => b.simplify()?.as_number().ok_or_else(|| {
                        debug!("cannot differentiate logarithm with symbolic base {}", b);
                        ExpressionError::UnsupportedOperation(
                            "differentiating a logarithm with a symbolic base".to_string(),
                        )
                    })?,
                };
                div(
                    antilog.diff(wrt)?,
                    mul(Expression::Constant(base.ln()), (**antilog).clone()),
                )
            }
        };

        derivative.simplify()
    }
}
