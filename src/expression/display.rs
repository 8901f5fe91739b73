use std::fmt;

use crate::expression::ast::Expression;

/// A same-precedence right child of a non-associative operator still
/// needs parentheses, so the right-hand threshold sits just above the
/// parent's own precedence.
const RIGHT_EPSILON: f64 = 0.1;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> f64 {
            match expr {
                Expression::Sum(_, _) | Expression::Difference(_, _) => 0.0,
                Expression::Product(_, _) | Expression::Division(_, _) => 1.0,
                Expression::Power(_, _) | Expression::Logarithm(_, _) => 2.0,
                Expression::Constant(_) | Expression::Variable(_) => 0.0,
            }
        }

        /// Render a child, wrapping it in parentheses when it is an
        /// operator node below the parent's effective precedence. A
        /// rendering that already carries outer parentheses is never
        /// double-wrapped.
        fn parenthesized(expr: &Expression, threshold: f64) -> String {
            let rendered = expr.to_string();
            if expr.is_operator()
                && precedence(expr) < threshold
                && !(rendered.starts_with('(') && rendered.ends_with(')'))
            {
                format!("({})", rendered)
            } else {
                rendered
            }
        }

        fn infix(
            f: &mut fmt::Formatter,
            left: &Expression,
            symbol: char,
            right: &Expression,
            precedence: f64,
        ) -> fmt::Result {
            write!(
                f,
                "{} {} {}",
                parenthesized(left, precedence),
                symbol,
                parenthesized(right, precedence + RIGHT_EPSILON)
            )
        }

        match self {
            Expression::Constant(n) => write!(f, "{}", n),
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Sum(l, r) => infix(f, l, '+', r, 0.0),
            Expression::Difference(l, r) => infix(f, l, '-', r, 0.0),
            Expression::Product(l, r) => infix(f, l, '*', r, 1.0),
            Expression::Division(l, r) => infix(f, l, '/', r, 1.0),
            Expression::Power(base, exponent) => write!(
                f,
                "{}^{}",
                parenthesized(base, 2.0),
                parenthesized(exponent, 2.0)
            ),
            Expression::Logarithm(None, antilog) => write!(f, "ln({})", antilog),
            Expression::Logarithm(Some(base), antilog) => {
                write!(f, "log({}, {})", base, antilog)
            }
        }
    }
}
