//! This is a crate for numerical polynomial root-finding over a bounded
//! search range.
//!
//! The range is cut into equal-width sub-intervals and an iterative solver
//! (bisection, secant or Newton) is run on every sub-interval in parallel.
//! The per-interval results are then filtered, rounded and deduplicated into
//! a [`RootSet`].
//!
//! ```
//! use poly_sweep::{Method, Poly, RootFilter, Solver, SolverConfig};
//!
//! // x^2 - 5x + 6
//! let poly = Poly::new([6.0, -5.0, 1.0]);
//! let solver = Solver::new(SolverConfig::default())?;
//! let roots = solver.roots(&poly, -10.0, 10.0, Method::Bisection, 100, &RootFilter::default())?;
//! assert_eq!(roots.as_slice(), &[2.0, 3.0]);
//! # Ok::<(), poly_sweep::Error>(())
//! ```

mod aggregate;
mod bisection;
mod config;
mod context;
mod dispatch;
mod error;
mod interval;
mod method;
mod newton;
mod poly;
mod secant;
mod solve;

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;

#[cfg(any(test, feature = "dashu-float"))]
pub mod accurate;

pub use aggregate::{RootSet, aggregate, dedup, round_to, within_bound};
pub use config::{RootFilter, SolverConfig, Tolerance};
pub use context::ExecutionContext;
pub use dispatch::{Dispatch, DispatchStats, dispatch};
pub use error::{Error, Miss, Result};
pub use interval::{Interval, partition};
pub use method::{Method, RawResult};
pub use poly::Poly;
pub use solve::{Solver, process_roots, solve_roots};

/// Denominators (secant slope, Newton derivative) smaller than this in
/// magnitude are treated as a degenerate step.
pub const SINGULAR_THRESHOLD: f64 = 1e-12;

// Do `x` and `y` bracket a root? An exact zero brackets with anything, NaN
// brackets with nothing.
fn brackets(x: f64, y: f64) -> bool {
    if x.is_nan() || y.is_nan() {
        return false;
    }
    !((x > 0.0 && y > 0.0) || (x < 0.0 && y < 0.0))
}
