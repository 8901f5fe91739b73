//! Probability layer built on top of the expression engine: ranges,
//! random variables, and concrete distributions. A density is just an
//! expression consumed through `eval`; nothing here reaches into node
//! internals.

mod errors;
mod range;
mod uniform;
mod variable;

pub use errors::RandomVariableError;
pub use range::Range;
pub use uniform::Uniform;
pub use variable::RandomVariable;
