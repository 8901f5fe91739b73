use thiserror::Error;

use crate::expression::ExpressionError;

/// Errors raised while working with a random variable's density.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomVariableError {
    #[error("Density evaluation error: {0}")]
    Expression(#[from] ExpressionError),
    #[error("Density of '{0}' did not reduce to a number")]
    SymbolicDensity(String),
}
