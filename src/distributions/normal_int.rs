//! Rounded-normal distribution on the integers, with optional truncation.

use rand::Rng;

use super::{DiscreteDistribution, IntSampler};
use crate::error::{Error, Result};
use crate::rngs::{default_source, seeded, DefaultSource};
use crate::support::Support;

#[derive(Clone, Debug)]
/// A discrete (rounded) normal distribution on the integers.
///
/// Samples a continuous `X ~ Normal(mean, sigma^2)` and returns
/// `Y = round_half_even(X)`, so probability mass falls on every integer
/// unless the distribution is truncated to a closed window `[lower, upper]`,
/// in which case mass is renormalized to the window.
///
/// For the untruncated form the PMF and CDF are exact given the standard
/// normal CDF `phi`:
///
/// ```text
/// pmf(k) = phi((k + 0.5 - mean)/sigma) - phi((k - 0.5 - mean)/sigma)
/// cdf(k) = phi((k + 0.5 - mean)/sigma)
/// ```
///
/// The truncated form renormalizes by the window mass
/// `Z = phi((upper + 0.5 - mean)/sigma) - phi((lower - 0.5 - mean)/sigma)`.
/// When `Z` is not strictly positive (the window sits so deep in a tail that
/// it captures numerically zero mass) the distribution collapses to a point
/// mass at `round_half_even(mean)` clamped into the window. The collapse is
/// decided once, at construction; it is a designed fallback, not an error.
///
/// `phi` is computed from an erf approximation (Abramowitz & Stegun 7.1.26,
/// max absolute error ~1.5e-7), so there is no dependency on a platform erf.
///
/// Sampling uses the Marsaglia polar method, which produces standard-normal
/// variates two at a time; the second is cached in a one-slot spare and
/// consumed by the next call. The spare makes instances stateful beyond the
/// generator itself, so share across threads only with external
/// synchronization. Truncated sampling rejects out-of-window draws and
/// retries without an iteration cap: expected cost is small, but a
/// non-degenerate window with extremely low mass can reject many times
/// (callers with extreme parameter choices should know this).
pub struct NormalInt<R = DefaultSource> {
    rng: R,
    mean_param: f64,
    sigma: f64,
    window: Window,
    // Marsaglia polar spare: None = must draw a fresh pair
    spare: Option<f64>,
    mean: f64,
    variance: f64,
}

#[derive(Clone, Copy, Debug)]
enum Window {
    Unbounded,
    Truncated { lower: i64, upper: i64, norm_z: f64 },
    Collapsed { lower: i64, upper: i64, value: i64 },
}

impl NormalInt<DefaultSource> {
    /// Creates an untruncated discrete normal using the crate's default
    /// source.
    ///
    /// Fails if `mean` is not finite or `sigma` is not finite and positive.
    pub fn new(mean: f64, sigma: f64) -> Result<Self> {
        Self::with_source(default_source(), mean, sigma)
    }

    /// Creates an untruncated discrete normal with a deterministic seed.
    pub fn with_seed(seed: u64, mean: f64, sigma: f64) -> Result<Self> {
        Self::with_source(seeded(seed), mean, sigma)
    }

    /// Creates a discrete normal truncated to the closed integer window
    /// `[lower, upper]`, using the crate's default source.
    ///
    /// Fails if the normal parameters are invalid or `lower > upper`.
    pub fn truncated(mean: f64, sigma: f64, lower: i64, upper: i64) -> Result<Self> {
        Self::truncated_with_source(default_source(), mean, sigma, lower, upper)
    }

    /// Creates a truncated discrete normal with a deterministic seed.
    pub fn truncated_with_seed(
        seed: u64,
        mean: f64,
        sigma: f64,
        lower: i64,
        upper: i64,
    ) -> Result<Self> {
        Self::truncated_with_source(seeded(seed), mean, sigma, lower, upper)
    }
}

impl<R: Rng> NormalInt<R> {
    /// Creates an untruncated discrete normal using the provided generator.
    ///
    /// Fails if `mean` is not finite or `sigma` is not finite and positive.
    pub fn with_source(rng: R, mean: f64, sigma: f64) -> Result<Self> {
        validate_params(mean, sigma)?;
        let (m, v) = untruncated_moments(mean, sigma);
        Ok(Self {
            rng,
            mean_param: mean,
            sigma,
            window: Window::Unbounded,
            spare: None,
            mean: m,
            variance: v,
        })
    }

    /// Creates a truncated discrete normal on `[lower, upper]` using the
    /// provided generator. Mass is renormalized to the window.
    ///
    /// Fails if the normal parameters are invalid or `lower > upper`.
    pub fn truncated_with_source(
        rng: R,
        mean: f64,
        sigma: f64,
        lower: i64,
        upper: i64,
    ) -> Result<Self> {
        validate_params(mean, sigma)?;
        if lower > upper {
            return Err(Error::InvalidParameters(format!(
                "require lower <= upper (got {lower} > {upper})"
            )));
        }

        // Z = P(Y in [lower, upper]) = phi(upper + 0.5) - phi(lower - 0.5)
        let z = phi(mean, sigma, upper as f64 + 0.5) - phi(mean, sigma, lower as f64 - 0.5);

        if !(z > 0.0) {
            // The window captures numerically no mass: collapse to a point
            // mass at the rounded mean, clamped into the window.
            let value = (mean.round_ties_even() as i64).clamp(lower, upper);
            return Ok(Self {
                rng,
                mean_param: mean,
                sigma,
                window: Window::Collapsed {
                    lower,
                    upper,
                    value,
                },
                spare: None,
                mean: value as f64,
                variance: 0.0,
            });
        }

        let (m, v) = truncated_moments(mean, sigma, lower, upper, z);
        Ok(Self {
            rng,
            mean_param: mean,
            sigma,
            window: Window::Truncated {
                lower,
                upper,
                norm_z: z,
            },
            spare: None,
            mean: m,
            variance: v,
        })
    }

    /// The mean `mu` of the underlying continuous normal.
    pub fn mean_param(&self) -> f64 {
        self.mean_param
    }

    /// The standard deviation `sigma` of the underlying continuous normal.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Draws a standard `Normal(0, 1)` via the Marsaglia polar method,
    /// caching the second variate of each accepted pair so every other call
    /// consumes no uniforms at all.
    fn next_gaussian(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        let (u, v, s) = loop {
            let u = 2.0 * self.rng.gen::<f64>() - 1.0;
            let v = 2.0 * self.rng.gen::<f64>() - 1.0;
            let s = u * u + v * v;
            // accept only points strictly inside the unit disk, excluding
            // the origin where the transform is undefined
            if s < 1.0 && s != 0.0 {
                break (u, v, s);
            }
        };
        let mul = (-2.0 * s.ln() / s).sqrt();
        self.spare = Some(v * mul);
        u * mul
    }
}

impl<R: Rng> IntSampler for NormalInt<R> {
    /// Draws one integer variate. Guaranteed to lie in `[lower, upper]` for
    /// truncated instances; unbounded otherwise (with quickly decaying
    /// tails).
    fn sample(&mut self) -> i64 {
        if let Window::Collapsed { value, .. } = self.window {
            return value;
        }
        loop {
            let g = self.mean_param + self.sigma * self.next_gaussian();
            let y = g.round_ties_even() as i64;
            match self.window {
                Window::Truncated { lower, upper, .. } if y < lower || y > upper => {
                    // reject and resample; no iteration cap
                }
                _ => return y,
            }
        }
    }
}

impl<R: Rng> DiscreteDistribution for NormalInt<R> {
    fn pmf(&self, k: i64) -> f64 {
        match self.window {
            Window::Collapsed { value, .. } => {
                if k == value {
                    1.0
                } else {
                    0.0
                }
            }
            Window::Unbounded => pmf_raw(self.mean_param, self.sigma, k),
            Window::Truncated {
                lower,
                upper,
                norm_z,
            } => {
                if k < lower || k > upper {
                    0.0
                } else {
                    pmf_raw(self.mean_param, self.sigma, k) / norm_z
                }
            }
        }
    }

    fn cdf(&self, k: i64) -> f64 {
        match self.window {
            Window::Collapsed { value, .. } => {
                if k < value {
                    0.0
                } else {
                    1.0
                }
            }
            Window::Unbounded => phi(self.mean_param, self.sigma, k as f64 + 0.5),
            Window::Truncated {
                lower,
                upper,
                norm_z,
            } => {
                if (k as i128) < (lower as i128) - 1 {
                    return 0.0;
                }
                if k >= upper {
                    return 1.0;
                }
                let num = phi(self.mean_param, self.sigma, k as f64 + 0.5)
                    - phi(self.mean_param, self.sigma, lower as f64 - 0.5);
                num / norm_z
            }
        }
    }

    /// The cached expected value: close to `mean` for the untruncated form
    /// (up to a tiny quantization effect), the renormalized window mean for
    /// the truncated form, and the collapse point for degenerate windows.
    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn support(&self) -> Support {
        match self.window {
            Window::Unbounded => Support::all_integers(),
            Window::Truncated { lower, upper, .. } | Window::Collapsed { lower, upper, .. } => {
                Support::closed_discrete(lower as f64, upper as f64)
            }
        }
    }
}

fn validate_params(mean: f64, sigma: f64) -> Result<()> {
    if !mean.is_finite() {
        return Err(Error::InvalidParameters(format!(
            "mean must be finite, got {mean}"
        )));
    }
    if !sigma.is_finite() || !(sigma > 0.0) {
        return Err(Error::InvalidParameters(format!(
            "sigma must be finite and > 0, got {sigma}"
        )));
    }
    Ok(())
}

/// erf(x) via Abramowitz & Stegun 7.1.26 (Horner form), max absolute error
/// ~1.5e-7.
fn erf_approx(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let ax = x.abs();
    let t = 1.0 / (1.0 + 0.3275911 * ax);
    let y = 1.0
        - (((((1.061405429 * t - 1.453152027) * t) + 1.421413741) * t - 0.284496736) * t
            + 0.254829592)
            * t
            * (-ax * ax).exp();
    sign * y
}

/// Standard normal CDF of `x` under `Normal(mean, sigma^2)`, i.e.
/// `phi((x - mean)/sigma)`.
fn phi(mean: f64, sigma: f64, x: f64) -> f64 {
    let z = (x - mean) / sigma;
    0.5 * (1.0 + erf_approx(z * core::f64::consts::FRAC_1_SQRT_2))
}

/// Untruncated rounded-normal PMF at `k`, clamped at zero to absorb tiny
/// negatives from roundoff in the tails.
fn pmf_raw(mean: f64, sigma: f64, k: i64) -> f64 {
    let p = phi(mean, sigma, k as f64 + 0.5) - phi(mean, sigma, k as f64 - 0.5);
    if p <= 0.0 {
        0.0
    } else {
        p
    }
}

/// Mean and variance of the untruncated rounded-normal, computed by summing
/// the PMF over `[floor(mean - 8*sigma), ceil(mean + 8*sigma)]` and
/// extending symmetrically (up to 32 steps per side) while the accumulated
/// mass falls short of 1 by more than 1e-12. Moments are normalized by the
/// actually summed mass.
fn untruncated_moments(mean: f64, sigma: f64) -> (f64, f64) {
    let mut a = (mean - 8.0 * sigma).floor() as i64;
    let mut b = (mean + 8.0 * sigma).ceil() as i64;

    let mut mass = 0.0;
    let mut m1 = 0.0;
    let mut m2 = 0.0;

    for k in a..=b {
        let p = pmf_raw(mean, sigma, k);
        mass += p;
        m1 += p * k as f64;
        m2 += p * (k as f64) * (k as f64);
    }

    let mut extend = 0;
    while mass < 1.0 - 1e-12 && extend < 32 {
        a -= 1;
        b += 1;
        let p_left = pmf_raw(mean, sigma, a);
        let p_right = pmf_raw(mean, sigma, b);
        mass += p_left + p_right;
        m1 += p_left * a as f64 + p_right * b as f64;
        m2 += p_left * (a as f64) * (a as f64) + p_right * (b as f64) * (b as f64);
        extend += 1;
    }

    if mass > 0.0 && (1.0 - mass).abs() > 1e-15 {
        m1 /= mass;
        m2 /= mass;
    }
    (m1, (m2 - m1 * m1).max(0.0))
}

/// Mean and variance of the truncated rounded-normal: an exact finite sum of
/// `pmf_raw / z` over the window.
fn truncated_moments(mean: f64, sigma: f64, lower: i64, upper: i64, z: f64) -> (f64, f64) {
    let mut m1 = 0.0;
    let mut m2 = 0.0;
    for k in lower..=upper {
        let p = pmf_raw(mean, sigma, k) / z;
        m1 += p * k as f64;
        m2 += p * (k as f64) * (k as f64);
    }
    (m1, (m2 - m1 * m1).max(0.0))
}
