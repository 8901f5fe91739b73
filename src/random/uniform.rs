use rand::Rng;

use crate::expression::Expression;
use crate::random::range::Range;
use crate::random::variable::RandomVariable;

/// A uniform random variable over the closed interval `[a, b]`, with the
/// constant density `1 / (b - a)`.
#[derive(Debug, Clone)]
pub struct Uniform {
    name: String,
    a: f64,
    b: f64,
    density: Expression,
    range: Range,
}

impl Uniform {
    /// Create a uniform variable over `[a, b]`. Panics unless `a < b`.
    pub fn new(name: impl Into<String>, a: f64, b: f64) -> Self {
        Uniform {
            name: name.into(),
            a,
            b,
            density: Expression::Constant(1.0 / (b - a)),
            range: Range::continuous(a, b),
        }
    }
}

impl RandomVariable for Uniform {
    fn name(&self) -> &str {
        &self.name
    }

    fn density(&self) -> &Expression {
        &self.density
    }

    fn range(&self) -> &Range {
        &self.range
    }

    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(self.a..=self.b)
    }

    fn expect(&self) -> f64 {
        (self.a + self.b) / 2.0
    }
}
