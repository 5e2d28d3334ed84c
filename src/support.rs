//! Description of a distribution's mathematical support (domain).

use core::fmt;

use crate::error::{Error, Result};

/// Whether a support's values are continuous reals or discrete integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Continuous, real-valued support.
    Continuous,
    /// Discrete, integer-valued support.
    Discrete,
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// The support of a probability distribution: numeric lower/upper bounds,
/// whether each bound is closed (inclusive) or open (exclusive), and whether
/// values are continuous reals or discrete integers.
///
/// Callers use this for validation, clamping, and axis ranges without
/// inspecting distribution internals. Typical shapes:
///
/// - Normal: `(-inf, +inf)` continuous
/// - Exponential: `[0, +inf)` continuous
/// - Poisson: `{0, 1, 2, ...}` discrete
/// - Beta: `(0, 1)` continuous, both endpoints open
pub struct Support {
    lower: f64,
    upper: f64,
    lower_closed: bool,
    upper_closed: bool,
    kind: Kind,
}

impl Support {
    /// Real line `(-inf, +inf)`, continuous.
    pub const REAL_LINE: Support =
        Support::raw(f64::NEG_INFINITY, false, f64::INFINITY, false, Kind::Continuous);

    /// Non-negative reals `[0, +inf)`, continuous.
    pub const NON_NEGATIVE_REALS: Support =
        Support::raw(0.0, true, f64::INFINITY, false, Kind::Continuous);

    /// Unit interval `(0, 1)`, continuous, both endpoints open.
    pub const UNIT_INTERVAL_OPEN: Support = Support::raw(0.0, false, 1.0, false, Kind::Continuous);

    /// Unit interval `[0, 1]`, continuous, both endpoints closed.
    pub const UNIT_INTERVAL_CLOSED: Support = Support::raw(0.0, true, 1.0, true, Kind::Continuous);

    /// Non-negative integers `{0, 1, 2, ...}`, discrete.
    pub const NON_NEGATIVE_INTEGERS: Support =
        Support::raw(0.0, true, f64::INFINITY, false, Kind::Discrete);

    const fn raw(
        lower: f64,
        lower_closed: bool,
        upper: f64,
        upper_closed: bool,
        kind: Kind,
    ) -> Self {
        Self {
            lower,
            upper,
            lower_closed,
            upper_closed,
            kind,
        }
    }

    /// Creates a continuous (real-valued) support with the given bounds.
    ///
    /// `lower` may be `f64::NEG_INFINITY` for a support unbounded below, and
    /// `upper` may be `f64::INFINITY` for one unbounded above; the closedness
    /// flag on an unbounded side is ignored. Finite bounds must satisfy
    /// `lower < upper`.
    pub fn continuous(
        lower: f64,
        lower_closed: bool,
        upper: f64,
        upper_closed: bool,
    ) -> Result<Self> {
        Self::validated(lower, lower_closed, upper, upper_closed, Kind::Continuous)
    }

    /// Creates a discrete (integer-valued) support with the given bounds.
    ///
    /// Bounds follow the same rules as [`Support::continuous`].
    pub fn discrete(lower: f64, lower_closed: bool, upper: f64, upper_closed: bool) -> Result<Self> {
        Self::validated(lower, lower_closed, upper, upper_closed, Kind::Discrete)
    }

    fn validated(
        lower: f64,
        lower_closed: bool,
        upper: f64,
        upper_closed: bool,
        kind: Kind,
    ) -> Result<Self> {
        if !lower.is_finite() && lower != f64::NEG_INFINITY {
            return Err(Error::InvalidParameters(format!(
                "lower bound must be finite or -inf, got {lower}"
            )));
        }
        if !upper.is_finite() && upper != f64::INFINITY {
            return Err(Error::InvalidParameters(format!(
                "upper bound must be finite or +inf, got {upper}"
            )));
        }
        if lower.is_finite() && upper.is_finite() && !(lower < upper) {
            return Err(Error::InvalidParameters(format!(
                "lower bound must be strictly less than upper (got {lower} >= {upper})"
            )));
        }
        Ok(Self::raw(lower, lower_closed, upper, upper_closed, kind))
    }

    /// Closed discrete interval `[lower, upper]` as reported by the integer
    /// distributions. Unlike the public factories this admits point
    /// intervals (`lower == upper`), which arise from degenerate
    /// distributions whose window already passed `lower <= upper`
    /// validation.
    pub(crate) fn closed_discrete(lower: f64, upper: f64) -> Self {
        Self::raw(lower, true, upper, true, Kind::Discrete)
    }

    /// Discrete support unbounded on both sides.
    pub(crate) fn all_integers() -> Self {
        Self::raw(f64::NEG_INFINITY, false, f64::INFINITY, false, Kind::Discrete)
    }

    /// The numeric lower bound, or `f64::NEG_INFINITY` if unbounded below.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// The numeric upper bound, or `f64::INFINITY` if unbounded above.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Whether the lower bound is included in the support. Ignored when the
    /// support is unbounded below.
    pub fn is_lower_closed(&self) -> bool {
        self.lower_closed
    }

    /// Whether the upper bound is included in the support. Ignored when the
    /// support is unbounded above.
    pub fn is_upper_closed(&self) -> bool {
        self.upper_closed
    }

    /// Whether the support extends to `-inf`.
    pub fn is_unbounded_below(&self) -> bool {
        self.lower == f64::NEG_INFINITY
    }

    /// Whether the support extends to `+inf`.
    pub fn is_unbounded_above(&self) -> bool {
        self.upper == f64::INFINITY
    }

    /// The value kind (continuous or discrete).
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Tests whether `x` lies within this support's interval, respecting
    /// open/closed endpoints and infinite bounds.
    ///
    /// For discrete supports this checks only the numeric interval; it does
    /// not require `x` to be an integer.
    pub fn contains(&self, x: f64) -> bool {
        let above_lower = self.is_unbounded_below()
            || if self.lower_closed {
                x >= self.lower
            } else {
                x > self.lower
            };
        let below_upper = self.is_unbounded_above()
            || if self.upper_closed {
                x <= self.upper
            } else {
                x < self.upper
            };
        above_lower && below_upper
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded_below() {
            write!(f, "(-inf, ")?;
        } else {
            write!(f, "{}{}, ", if self.lower_closed { '[' } else { '(' }, self.lower)?;
        }
        if self.is_unbounded_above() {
            write!(f, "+inf)")?;
        } else {
            write!(f, "{}{}", self.upper, if self.upper_closed { ']' } else { ')' })?;
        }
        match self.kind {
            Kind::Continuous => write!(f, " continuous"),
            Kind::Discrete => write!(f, " discrete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_factory_builds_expected_bounds() {
        let s = Support::continuous(-2.0, true, 3.5, false).unwrap();

        assert_eq!(s.lower(), -2.0);
        assert_eq!(s.upper(), 3.5);
        assert!(s.is_lower_closed());
        assert!(!s.is_upper_closed());
        assert_eq!(s.kind(), Kind::Continuous);

        // contains respects the half-open interval
        assert!(s.contains(-2.0));
        assert!(s.contains(0.0));
        assert!(!s.contains(3.5));
        assert!(!s.contains(-2.0000001));
    }

    #[test]
    fn discrete_factory_builds_expected_metadata() {
        let s = Support::discrete(0.0, true, 10.0, true).unwrap();

        assert_eq!(s.kind(), Kind::Discrete);
        assert!(s.contains(0.0));
        assert!(s.contains(10.0));
        // numeric interval check only, integrality is not enforced
        assert!(s.contains(5.5));
        assert!(!s.contains(-0.0001));
        assert!(!s.contains(10.0001));
    }

    #[test]
    fn presets_behave_as_advertised() {
        let real = Support::REAL_LINE;
        assert!(real.is_unbounded_below());
        assert!(real.is_unbounded_above());
        assert!(real.contains(0.0));
        assert!(real.contains(-123.456));
        assert!(real.contains(7.89e10));

        let non_neg = Support::NON_NEGATIVE_REALS;
        assert!(non_neg.is_lower_closed());
        assert!(non_neg.contains(0.0));
        assert!(!non_neg.contains(-1e-12));

        let unit_open = Support::UNIT_INTERVAL_OPEN;
        assert!(!unit_open.contains(0.0));
        assert!(!unit_open.contains(1.0));
        assert!(unit_open.contains(0.5));

        let unit_closed = Support::UNIT_INTERVAL_CLOSED;
        assert!(unit_closed.contains(0.0));
        assert!(unit_closed.contains(1.0));

        let ints = Support::NON_NEGATIVE_INTEGERS;
        assert_eq!(ints.kind(), Kind::Discrete);
        assert!(ints.contains(0.0));
        assert!(!ints.contains(-1.0));
    }

    #[test]
    fn invalid_finite_bounds_are_rejected() {
        assert!(Support::continuous(5.0, true, 5.0, true).is_err());
        assert!(Support::continuous(6.0, false, 5.0, true).is_err());
        assert!(Support::discrete(3.0, true, 2.0, true).is_err());
        assert!(Support::continuous(f64::NAN, true, 1.0, true).is_err());
        assert!(Support::continuous(0.0, true, f64::NAN, true).is_err());
        // +inf is not a valid lower bound, nor -inf a valid upper bound
        assert!(Support::continuous(f64::INFINITY, false, 1.0, true).is_err());
        assert!(Support::continuous(0.0, true, f64::NEG_INFINITY, false).is_err());
    }

    #[test]
    fn equality_is_structural() {
        let a = Support::continuous(0.0, true, 1.0, false).unwrap();
        let b = Support::continuous(0.0, true, 1.0, false).unwrap();
        let c = Support::discrete(0.0, true, 1.0, false).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Support::continuous(0.0, false, 1.0, false).unwrap());
    }

    #[test]
    fn display_is_readable() {
        let s = Support::continuous(0.0, true, 1.0, false).unwrap();
        assert_eq!(s.to_string(), "[0, 1) continuous");
        assert_eq!(Support::REAL_LINE.to_string(), "(-inf, +inf) continuous");
        assert_eq!(Support::closed_discrete(-3.0, 2.0).to_string(), "[-3, 2] discrete");
    }
}
