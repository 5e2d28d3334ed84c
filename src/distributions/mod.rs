//! Probability distributions exposing a uniform statistical surface over a
//! caller-chosen source of uniform bits.

use crate::error::Result;
use crate::support::Support;

mod normal_int;
pub use normal_int::NormalInt;

mod uniform;
pub use uniform::UniformDouble;

mod uniform_int;
pub use uniform_int::UniformInt;

/// Minimal contract for anything that can produce real-valued samples.
/// Useful for simulations that only need sampling, not the full
/// distribution surface.
pub trait DoubleSampler {
    /// Produce one random sample.
    fn sample(&mut self) -> f64;
}

/// Minimal contract for anything that can produce integer-valued samples.
pub trait IntSampler {
    /// Produce one random integer sample.
    fn sample(&mut self) -> i64;
}

/// Contract for continuous probability distributions.
///
/// Implementations hold immutable parameters validated at construction and
/// own their random source; only `sample` mutates state.
pub trait ContinuousDistribution: DoubleSampler {
    /// Probability density function; 0 outside the support.
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative distribution function `P(X <= x)`, in `[0, 1]`.
    fn cdf(&self, x: f64) -> f64;

    /// Quantile function (inverse CDF) for `p` in `[0, 1]`.
    ///
    /// Fails with [`crate::Error::ProbabilityOutOfRange`] for any other `p`.
    fn quantile(&self, p: f64) -> Result<f64>;

    /// Theoretical mean of the distribution.
    fn mean(&self) -> f64;

    /// Theoretical variance of the distribution.
    fn variance(&self) -> f64;

    /// The mathematical support (domain) of the distribution.
    fn support(&self) -> Support;
}

/// Contract for discrete probability distributions over the integers.
pub trait DiscreteDistribution: IntSampler {
    /// Probability mass at `k`; 0 outside the support.
    fn pmf(&self, k: i64) -> f64;

    /// Cumulative distribution function `P(X <= k)`, in `[0, 1]`.
    fn cdf(&self, k: i64) -> f64;

    /// Theoretical mean of the distribution.
    fn mean(&self) -> f64;

    /// Theoretical variance of the distribution.
    fn variance(&self) -> f64;

    /// The mathematical support (domain) of the distribution.
    fn support(&self) -> Support;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantSampler(f64);

    impl DoubleSampler for ConstantSampler {
        fn sample(&mut self) -> f64 {
            self.0
        }
    }

    struct Die(i64);

    impl IntSampler for Die {
        fn sample(&mut self) -> i64 {
            self.0
        }
    }

    #[test]
    fn sampler_traits_are_object_safe() {
        let mut c = ConstantSampler(1.2345);
        let s: &mut dyn DoubleSampler = &mut c;
        let total: f64 = (0..10).map(|_| s.sample()).sum();
        assert_eq!(total, 12.345);

        let mut d = Die(4);
        let s: &mut dyn IntSampler = &mut d;
        for _ in 0..5 {
            assert_eq!(s.sample(), 4);
        }
    }

    #[test]
    fn distribution_traits_are_object_safe() {
        let mut u = UniformDouble::with_seed(1, 0.0, 1.0).unwrap();
        let d: &mut dyn ContinuousDistribution = &mut u;
        assert!(d.support().contains(DoubleSampler::sample(d)));

        let mut i = UniformInt::with_seed(1, 0, 5).unwrap();
        let d: &mut dyn DiscreteDistribution = &mut i;
        assert!(d.support().contains(IntSampler::sample(d) as f64));
    }
}
