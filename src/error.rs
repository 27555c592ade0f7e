//! Error types for poly-sweep.

use thiserror::Error;

/// Result type alias using poly-sweep's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a whole solve call.
///
/// Problems confined to a single sub-interval are not errors at this level;
/// see [`Miss`].
#[derive(Error, Debug)]
pub enum Error {
    /// The search range is empty, reversed, non-finite, or split into zero
    /// sub-intervals.
    #[error("invalid search range [{low}, {high}] with {num_intervals} sub-intervals")]
    InvalidRange {
        /// Lower end of the requested range
        low: f64,
        /// Upper end of the requested range
        high: f64,
        /// Requested number of sub-intervals
        num_intervals: usize,
    },

    /// A method code at the external boundary that names no solver.
    #[error("unknown root-finding method code {code} (expected 0, 1 or 2)")]
    UnknownMethod {
        /// The rejected code
        code: i32,
    },

    /// A polynomial coefficient is NaN or infinite.
    #[error("coefficient {index} is not finite ({value})")]
    NonFiniteCoefficient {
        /// Index of the offending coefficient (power of x)
        index: usize,
        /// Its value
        value: f64,
    },

    /// Solver or filter configuration is unusable.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it
        reason: String,
    },

    /// The worker pool could not be started.
    #[error("failed to start worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    /// A worker died before every sub-interval was solved.
    #[error("a worker panicked during dispatch; no results were produced")]
    WorkerPanicked,
}

/// Why a single sub-interval produced no root.
///
/// These never abort a run: the dispatcher records them as
/// [`RawResult::NotFound`](crate::RawResult::NotFound).
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Miss {
    /// The endpoints have the same strict sign (bisection only).
    #[error("endpoints do not bracket a sign change")]
    NotBracketed,

    /// A near-zero denominator or a non-finite iterate.
    #[error("degenerate iteration step")]
    Degenerate,

    /// The iteration cap was reached before the tolerance was met.
    #[error("did not converge within the iteration cap")]
    NotConverged,
}
