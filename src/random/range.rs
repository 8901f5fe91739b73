/// Step between sample points when sweeping a continuous range.
const SWEEP_STEP: f64 = 0.1;

/// The set of values a random variable can take.
#[derive(Debug, Clone, PartialEq)]
pub enum Range {
    /// An interval between `a` and `b`; `closed` intervals include
    /// their endpoints.
    Continuous { a: f64, b: f64, closed: bool },
    /// An explicit set of points.
    Discrete(Vec<f64>),
    /// A combination of other ranges. Overlap between sub-ranges is not
    /// checked.
    Compound(Vec<Range>),
}

impl Range {
    /// A closed interval `[a, b]`. Panics unless `a < b`: the interval
    /// must be proper and non-degenerate.
    pub fn continuous(a: f64, b: f64) -> Self {
        assert!(a < b, "interval bounds must satisfy a < b");
        Range::Continuous { a, b, closed: true }
    }

    /// An open interval `(a, b)`. Panics unless `a < b`.
    pub fn open(a: f64, b: f64) -> Self {
        assert!(a < b, "interval bounds must satisfy a < b");
        Range::Continuous {
            a,
            b,
            closed: false,
        }
    }

    /// Whether `item` lies in this range.
    pub fn contains(&self, item: f64) -> bool {
        match self {
            Range::Continuous { a, b, closed } => {
                if *closed {
                    *a <= item && item <= *b
                } else {
                    *a < item && item < *b
                }
            }
            Range::Discrete(elems) => elems.contains(&item),
            Range::Compound(ranges) => ranges.iter().any(|r| r.contains(item)),
        }
    }

    /// Iterate over sample points of this range. A continuous range is
    /// swept from `a` to `b` in fixed steps; a compound range chains its
    /// sub-ranges.
    pub fn iter(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            Range::Continuous { a, b, .. } => {
                let b = *b;
                Box::new(std::iter::successors(Some(*a), move |x| {
                    let next = x + SWEEP_STEP;
                    if next <= b {
                        Some(next)
                    } else {
                        None
                    }
                }))
            }
            Range::Discrete(elems) => Box::new(elems.iter().copied()),
            Range::Compound(ranges) => Box::new(ranges.iter().flat_map(|r| r.iter())),
        }
    }
}
