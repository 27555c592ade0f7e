//! Run configuration.
//!
//! Everything here is plain in-memory data passed to [`Solver`](crate::Solver)
//! and friends; with the `serde` feature it can also be embedded in a caller's
//! own config files.

use crate::{Error, Result};

/// Convergence settings shared by every sub-interval of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    /// Threshold on `|f(x)|` and on the step (or bracket) size.
    ///
    /// Both tests are absolute. The `|f(x)|` test is not scaled by the
    /// coefficients, so for a polynomial with tiny coefficients every point
    /// near a root passes it and the root comes back coarse. Scale such a
    /// polynomial up first, or lower `value`.
    pub value: f64,
    /// Maximum number of refinement steps before giving up.
    pub max_iter: usize,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            value: 1e-10,
            max_iter: 100,
        }
    }
}

impl Tolerance {
    pub fn validate(&self) -> Result<()> {
        if !(self.value.is_finite() && self.value > 0.0) {
            return Err(Error::InvalidConfig {
                reason: format!("tolerance must be finite and > 0, got {}", self.value),
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidConfig {
                reason: "max_iter must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Configuration for a [`Solver`](crate::Solver).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Convergence settings.
    pub tolerance: Tolerance,
    /// Number of worker threads (0 = one per available core).
    pub num_threads: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            num_threads: 0,
        }
    }
}

impl SolverConfig {
    /// Set the convergence threshold
    #[must_use]
    pub fn with_tolerance(mut self, value: f64) -> Self {
        self.tolerance.value = value;
        self
    }

    /// Set the iteration cap
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.tolerance.max_iter = max_iter;
        self
    }

    /// Set the number of threads
    #[must_use]
    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = n;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.tolerance.validate()
    }
}

/// Post-processing applied to raw per-interval results.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootFilter {
    /// Roots with `|r| >= bound` are discarded.
    pub bound: f64,
    /// Number of decimal digits kept; also the deduplication resolution.
    pub precision: i32,
}

impl Default for RootFilter {
    fn default() -> Self {
        Self {
            bound: 10_000.0,
            precision: 4,
        }
    }
}

impl RootFilter {
    #[must_use]
    pub fn new(bound: f64, precision: i32) -> Self {
        Self { bound, precision }
    }

    pub fn validate(&self) -> Result<()> {
        // An infinite bound is fine: it only drops non-finite values.
        if self.bound.is_nan() || self.bound <= 0.0 {
            return Err(Error::InvalidConfig {
                reason: format!("bound must be > 0, got {}", self.bound),
            });
        }
        Ok(())
    }
}
