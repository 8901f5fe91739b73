//! The expression engine, split into per-concern submodules: the node
//! enum, the composition layer, evaluation, differentiation, and the
//! infix renderer.

mod ast;
mod build;
mod diff;
mod display;
mod errors;
mod eval;

pub use ast::Expression;
pub use build::{add, div, ln, log, mul, pow, sub};
pub use errors::ExpressionError;
pub use eval::Bindings;

#[cfg(test)]
mod tests;
