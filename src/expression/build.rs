//! Composition layer: anything number-like combines into operator nodes,
//! with bare numbers lifted to `Constant` first. Construction never fails;
//! semantic errors surface later during evaluation or differentiation.

use std::ops;

use crate::expression::ast::Expression;

impl From<f64> for Expression {
    fn from(val: f64) -> Self {
        Expression::Constant(val)
    }
}

impl From<i32> for Expression {
    fn from(val: i32) -> Self {
        Expression::Constant(f64::from(val))
    }
}

/// Build a `Sum` node.
pub fn add(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Expression {
    Expression::Sum(Box::new(lhs.into()), Box::new(rhs.into()))
}

/// Build a `Difference` node.
pub fn sub(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Expression {
    Expression::Difference(Box::new(lhs.into()), Box::new(rhs.into()))
}

/// Build a `Product` node.
pub fn mul(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Expression {
    Expression::Product(Box::new(lhs.into()), Box::new(rhs.into()))
}

/// Build a `Division` node.
pub fn div(lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Expression {
    Expression::Division(Box::new(lhs.into()), Box::new(rhs.into()))
}

/// Build a `Power` node.
pub fn pow(base: impl Into<Expression>, exponent: impl Into<Expression>) -> Expression {
    Expression::Power(Box::new(base.into()), Box::new(exponent.into()))
}

/// Build a natural logarithm node.
pub fn ln(antilog: impl Into<Expression>) -> Expression {
    Expression::Logarithm(None, Box::new(antilog.into()))
}

/// Build a logarithm node with an explicit base.
pub fn log(base: impl Into<Expression>, antilog: impl Into<Expression>) -> Expression {
    Expression::Logarithm(Some(Box::new(base.into())), Box::new(antilog.into()))
}

impl<T: Into<Expression>> ops::Add<T> for Expression {
    type Output = Expression;

    fn add(self, rhs: T) -> Expression {
        add(self, rhs)
    }
}

impl<T: Into<Expression>> ops::Sub<T> for Expression {
    type Output = Expression;

    fn sub(self, rhs: T) -> Expression {
        sub(self, rhs)
    }
}

impl<T: Into<Expression>> ops::Mul<T> for Expression {
    type Output = Expression;

    fn mul(self, rhs: T) -> Expression {
        mul(self, rhs)
    }
}

impl<T: Into<Expression>> ops::Div<T> for Expression {
    type Output = Expression;

    fn div(self, rhs: T) -> Expression {
        div(self, rhs)
    }
}

impl ops::Add<Expression> for f64 {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        add(self, rhs)
    }
}

impl ops::Sub<Expression> for f64 {
    type Output = Expression;

    fn sub(self, rhs: Expression) -> Expression {
        sub(self, rhs)
    }
}

impl ops::Mul<Expression> for f64 {
    type Output = Expression;

    fn mul(self, rhs: Expression) -> Expression {
        mul(self, rhs)
    }
}

impl ops::Div<Expression> for f64 {
    type Output = Expression;

    fn div(self, rhs: Expression) -> Expression {
        div(self, rhs)
    }
}

impl Expression {
    /// Raise this expression to `exponent`. There is no exponentiation
    /// operator to overload, so this mirrors the `^` composition as a
    /// method.
    pub fn pow(self, exponent: impl Into<Expression>) -> Expression {
        pow(self, exponent)
    }
}
