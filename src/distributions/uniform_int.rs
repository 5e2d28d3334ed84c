//! Discrete uniform distribution on a closed integer interval.

use rand::Rng;

use super::{DiscreteDistribution, IntSampler};
use crate::error::{Error, Result};
use crate::rngs::{default_source, seeded, DefaultSource};
use crate::support::Support;

#[derive(Clone, Debug)]
/// Discrete `Uniform(a, b)` on the closed integer interval `[a, b]` with
/// `a <= b`. Equal bounds give a degenerate point distribution.
///
/// PMF: `P(X = k) = 1 / n` for `k` in `[a, b]` with `n = b - a + 1`, else 0.
/// CDF: `F(k) = 0` for `k < a`; `(k - a + 1) / n` for `a <= k <= b`; 1 for
/// `k > b`. Mean `(a + b) / 2`, variance `(n^2 - 1) / 12`.
pub struct UniformInt<R = DefaultSource> {
    rng: R,
    a: i64,
    b: i64,
    // cardinality in i128 so the full i64 span cannot overflow
    n: i128,
    pmf: f64,
    mean: f64,
    variance: f64,
}

impl UniformInt<DefaultSource> {
    /// Constructs a `UniformInt(a, b)` using the crate's default source.
    ///
    /// Fails if `a > b`.
    pub fn new(a: i64, b: i64) -> Result<Self> {
        Self::with_source(default_source(), a, b)
    }

    /// Constructs a `UniformInt(a, b)` with a deterministic seed.
    pub fn with_seed(seed: u64, a: i64, b: i64) -> Result<Self> {
        Self::with_source(seeded(seed), a, b)
    }
}

impl<R: Rng> UniformInt<R> {
    /// Constructs a `UniformInt(a, b)` using the provided generator.
    ///
    /// Fails if `a > b`.
    pub fn with_source(rng: R, a: i64, b: i64) -> Result<Self> {
        if a > b {
            return Err(Error::InvalidParameters(format!(
                "require a <= b (got a={a}, b={b})"
            )));
        }
        let n = (b as i128) - (a as i128) + 1;
        let nn = n as f64;
        Ok(Self {
            rng,
            a,
            b,
            n,
            pmf: 1.0 / nn,
            mean: 0.5 * (a as f64 + b as f64),
            variance: (nn * nn - 1.0) / 12.0,
        })
    }

    /// The inclusive lower bound `a`.
    pub fn lower_bound(&self) -> i64 {
        self.a
    }

    /// The inclusive upper bound `b`.
    pub fn upper_bound(&self) -> i64 {
        self.b
    }
}

impl<R: Rng> IntSampler for UniformInt<R> {
    fn sample(&mut self) -> i64 {
        // unbiased r in [0, n), shifted into [a, b]
        let r = self.rng.gen_range(0..self.n);
        (self.a as i128 + r) as i64
    }
}

impl<R: Rng> DiscreteDistribution for UniformInt<R> {
    fn pmf(&self, k: i64) -> f64 {
        if k >= self.a && k <= self.b {
            self.pmf
        } else {
            0.0
        }
    }

    fn cdf(&self, k: i64) -> f64 {
        if k < self.a {
            return 0.0;
        }
        if k >= self.b {
            return 1.0;
        }
        let count = (k as i128) - (self.a as i128) + 1;
        count as f64 / self.n as f64
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn support(&self) -> Support {
        Support::closed_discrete(self.a as f64, self.b as f64)
    }
}
