//! Continuous uniform distribution on a half-open real interval.

use rand::Rng;

use super::{ContinuousDistribution, DoubleSampler};
use crate::error::{Error, Result};
use crate::rngs::{default_source, seeded, DefaultSource};
use crate::support::Support;

#[derive(Clone, Debug)]
/// Continuous `Uniform(a, b)` on the half-open interval `[a, b)` with
/// `a < b`.
///
/// PDF: `f(x) = 1 / (b - a)` for `x` in `[a, b)`, else 0.
/// CDF: `F(x) = 0` for `x <= a`; `(x - a) / (b - a)` for `a < x < b`;
/// 1 for `x >= b`.
pub struct UniformDouble<R = DefaultSource> {
    rng: R,
    a: f64,
    b: f64,
    width: f64,
}

impl UniformDouble<DefaultSource> {
    /// Constructs a `UniformDouble(a, b)` using the crate's default source.
    ///
    /// Fails if either bound is non-finite or `a >= b`.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        Self::with_source(default_source(), a, b)
    }

    /// Constructs a `UniformDouble(a, b)` with a deterministic seed.
    pub fn with_seed(seed: u64, a: f64, b: f64) -> Result<Self> {
        Self::with_source(seeded(seed), a, b)
    }
}

impl<R: Rng> UniformDouble<R> {
    /// Constructs a `UniformDouble(a, b)` using the provided generator.
    ///
    /// Fails if either bound is non-finite or `a >= b`.
    pub fn with_source(rng: R, a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::InvalidParameters(format!(
                "bounds must be finite (got a={a}, b={b})"
            )));
        }
        if !(a < b) {
            return Err(Error::InvalidParameters(format!(
                "require a < b (got a={a}, b={b})"
            )));
        }
        Ok(Self {
            rng,
            a,
            b,
            width: b - a,
        })
    }

    /// The inclusive lower bound `a`.
    pub fn lower_bound(&self) -> f64 {
        self.a
    }

    /// The exclusive upper bound `b`.
    pub fn upper_bound(&self) -> f64 {
        self.b
    }
}

impl<R: Rng> DoubleSampler for UniformDouble<R> {
    fn sample(&mut self) -> f64 {
        // maps U[0,1) onto [a,b)
        self.a + self.rng.gen::<f64>() * self.width
    }
}

impl<R: Rng> ContinuousDistribution for UniformDouble<R> {
    fn pdf(&self, x: f64) -> f64 {
        if x >= self.a && x < self.b {
            1.0 / self.width
        } else {
            0.0
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.a {
            0.0
        } else if x >= self.b {
            1.0
        } else {
            (x - self.a) / self.width
        }
    }

    /// Quantile (inverse CDF) for `p` in `[0, 1]`.
    ///
    /// `quantile(1.0)` returns the excluded upper bound `b` by convention,
    /// even though `b` lies outside the sampled support `[a, b)`.
    fn quantile(&self, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::ProbabilityOutOfRange(p));
        }
        if p == 0.0 {
            return Ok(self.a);
        }
        if p == 1.0 {
            return Ok(self.b);
        }
        Ok(self.a + p * self.width)
    }

    fn mean(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    fn variance(&self) -> f64 {
        self.width * self.width / 12.0
    }

    fn support(&self) -> Support {
        // a < b holds, so the strict factory cannot fail
        Support::continuous(self.a, true, self.b, false)
            .expect("bounds were validated at construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::Kind;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn construction_rejects_bad_bounds() {
        assert!(UniformDouble::new(1.0, 1.0).is_err());
        assert!(UniformDouble::new(2.0, 1.0).is_err());
        assert!(UniformDouble::new(f64::NAN, 1.0).is_err());
        assert!(UniformDouble::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn samples_stay_in_half_open_interval() {
        let (a, b) = (-1.5, 2.25);
        let mut d = UniformDouble::with_seed(4242, a, b).unwrap();
        for _ in 0..10_000 {
            let x = d.sample();
            assert!(x >= a && x < b, "sample out of [a,b): {x}");
        }
    }

    #[test]
    fn pdf_and_cdf_match_closed_forms() {
        let d = UniformDouble::with_seed(1, 0.0, 5.0).unwrap();

        assert_relative_eq!(d.pdf(2.5), 0.2);
        assert_relative_eq!(d.pdf(0.0), 0.2);
        assert_eq!(d.pdf(5.0), 0.0); // excluded endpoint
        assert_eq!(d.pdf(-0.1), 0.0);

        assert_eq!(d.cdf(-1.0), 0.0);
        assert_eq!(d.cdf(0.0), 0.0);
        assert_relative_eq!(d.cdf(2.5), 0.5);
        assert_eq!(d.cdf(5.0), 1.0);
        assert_eq!(d.cdf(6.0), 1.0);
    }

    #[test]
    fn quantile_endpoints_follow_convention() {
        let d = UniformDouble::with_seed(1, 2.0, 8.0).unwrap();
        assert_eq!(d.quantile(0.0).unwrap(), 2.0);
        // p = 1 returns the excluded upper bound, intentionally
        assert_eq!(d.quantile(1.0).unwrap(), 8.0);
        assert_relative_eq!(d.quantile(0.5).unwrap(), 5.0);

        assert_eq!(
            d.quantile(-0.1),
            Err(Error::ProbabilityOutOfRange(-0.1))
        );
        assert!(d.quantile(1.1).is_err());
        assert!(d.quantile(f64::NAN).is_err());
    }

    #[test]
    fn moments_match_closed_forms() {
        let d = UniformDouble::with_seed(1, 0.0, 10.0).unwrap();
        assert_relative_eq!(d.mean(), 5.0);
        assert_relative_eq!(d.variance(), 100.0 / 12.0);
    }

    #[test]
    fn support_is_half_open_continuous() {
        let d = UniformDouble::with_seed(1, -2.0, 3.5).unwrap();
        let s = d.support();
        assert_eq!(s.kind(), Kind::Continuous);
        assert_eq!(s.lower(), -2.0);
        assert_eq!(s.upper(), 3.5);
        assert!(s.is_lower_closed());
        assert!(!s.is_upper_closed());
        assert!(s.contains(-2.0));
        assert!(!s.contains(3.5));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut d1 = UniformDouble::with_seed(999, 0.0, 1.0).unwrap();
        let mut d2 = UniformDouble::with_seed(999, 0.0, 1.0).unwrap();
        for i in 0..10_000 {
            let (x1, x2) = (d1.sample(), d2.sample());
            assert_eq!(x1, x2, "determinism failure at draw {i}");
        }
    }

    #[test]
    fn different_seeds_diverge_quickly() {
        let mut d1 = UniformDouble::with_seed(999, 0.0, 1.0).unwrap();
        let mut d2 = UniformDouble::with_seed(1000, 0.0, 1.0).unwrap();
        let diverged = (0..1_000).any(|_| d1.sample() != d2.sample());
        assert!(diverged);
    }

    proptest! {
        #[test]
        fn cdf_stays_in_unit_interval(
            a in -100.0_f64..0.0,
            b in 1.0_f64..100.0,
            x in -200.0_f64..200.0,
        ) {
            let d = UniformDouble::with_seed(1, a, b).unwrap();
            let c = d.cdf(x);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn quantile_roundtrips_through_cdf(
            a in -100.0_f64..0.0,
            b in 1.0_f64..100.0,
            p in 0.001_f64..0.999,
        ) {
            let d = UniformDouble::with_seed(1, a, b).unwrap();
            let x = d.quantile(p).unwrap();
            prop_assert!((d.cdf(x) - p).abs() < 1e-12);
        }
    }
}
