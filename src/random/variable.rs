use log::debug;

use crate::expression::{Bindings, Expression};
use crate::random::errors::RandomVariableError;
use crate::random::range::Range;

/// A named random variable: a density expression over a range.
///
/// The density is an ordinary [`Expression`] in the variable's own name;
/// this trait only consumes the engine's evaluation surface and needs no
/// knowledge of node internals.
pub trait RandomVariable {
    fn name(&self) -> &str;

    /// The density function, as an expression in [`Self::name`].
    fn density(&self) -> &Expression;

    fn range(&self) -> &Range;

    /// Draw one sample from the distribution.
    fn sample(&self) -> f64;

    /// The expected value of the distribution.
    fn expect(&self) -> f64;

    /// The density evaluated at `point`, by binding this variable's name.
    ///
    /// # Errors
    ///
    /// Returns an error if the density fails to evaluate or does not
    /// reduce to a number at the given point.
    fn density_at(&self, point: f64) -> Result<f64, RandomVariableError> {
        debug!("evaluating density of '{}' at {}", self.name(), point);

        let mut bindings = Bindings::new();
        bindings.insert(self.name().to_string(), point);

        let value = self.density().eval(&bindings)?;
        value
            .as_number()
            .ok_or_else(|| RandomVariableError::SymbolicDensity(self.name().to_string()))
    }
}
