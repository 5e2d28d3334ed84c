//! Error taxonomy for the crate.
//!
//! Every failure stems from invalid caller input and is detected eagerly:
//! bad parameters are rejected at construction, and a `quantile` call with a
//! probability outside `[0, 1]` is rejected at the call site. Nothing here is
//! transient, so there is no retry surface.

use thiserror::Error;

/// Errors produced by distribution constructors and quantile evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Rejected at construction: non-finite or misordered bounds, a
    /// non-positive or non-finite sigma, or a truncation window with
    /// `lower > upper`. Never raised after construction succeeds.
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(String),

    /// `quantile(p)` was called with `p` outside `[0, 1]` (or NaN).
    #[error("probability must lie in [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
