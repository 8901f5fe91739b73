use thiserror::Error;

/// Errors raised during evaluation or differentiation. Raised at the
/// point of detection and never recovered internally: the whole
/// expression fails, there is no partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
