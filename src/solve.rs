use tracing::debug;

use crate::{
    Error, ExecutionContext, Method, Poly, RawResult, Result, RootFilter, RootSet, SolverConfig,
    aggregate, dispatch, partition,
};

/// Finds polynomial roots by sweeping a search range with a parallel
/// iterative solver.
///
/// A `Solver` only holds configuration. Every call builds its own
/// [`ExecutionContext`] and releases it before returning.
#[derive(Clone, Debug)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if the tolerance is unusable.
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs `method` on each of `num_intervals` equal slices of
    /// `[low, high]`, returning one result per slice in order.
    ///
    /// # Errors
    ///
    /// Invalid ranges and non-finite coefficients are rejected before any
    /// work starts. Worker pool failures abort the whole call.
    pub fn raw_roots(
        &self,
        poly: &Poly,
        low: f64,
        high: f64,
        method: Method,
        num_intervals: usize,
    ) -> Result<Vec<RawResult>> {
        debug!(low, high, num_intervals, %method, degree = poly.degree(), "solving");
        let intervals = partition(low, high, num_intervals)?;
        if let Some((index, value)) = poly.first_non_finite() {
            return Err(Error::NonFiniteCoefficient { index, value });
        }

        let ctx = ExecutionContext::new(self.config.num_threads)?;
        let out = dispatch(&ctx, poly, &intervals, method, &self.config.tolerance)?;
        Ok(out.results)
    }

    /// Like [`Solver::raw_roots`], followed by [`aggregate`].
    pub fn roots(
        &self,
        poly: &Poly,
        low: f64,
        high: f64,
        method: Method,
        num_intervals: usize,
        filter: &RootFilter,
    ) -> Result<RootSet> {
        filter.validate()?;
        let raw = self.raw_roots(poly, low, high, method, num_intervals)?;
        Ok(aggregate(raw, filter))
    }
}

/// Raw per-interval roots, as plain floats with NaN for "not found".
///
/// `method` is 0 for bisection, 1 for secant and 2 for Newton. Uses the
/// default [`SolverConfig`].
pub fn solve_roots(
    low: f64,
    high: f64,
    coefficients: &[f64],
    method: i32,
    num_intervals: usize,
) -> Result<Vec<f64>> {
    let method = Method::try_from(method)?;
    let solver = Solver::new(SolverConfig::default())?;
    let raw = solver.raw_roots(&Poly::new(coefficients), low, high, method, num_intervals)?;
    Ok(raw.into_iter().map(RawResult::to_sentinel).collect())
}

/// Post-processes the output of [`solve_roots`]: drops NaNs and anything
/// with `|r| >= bound`, then rounds to `precision` digits and deduplicates.
pub fn process_roots(raw: &[f64], bound: f64, precision: i32) -> RootSet {
    let raw = raw.iter().map(|&x| RawResult::from_sentinel(x));
    aggregate(raw, &RootFilter::new(bound, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUADRATIC: [f64; 3] = [6.0, -5.0, 1.0];
    const QUINTIC: [f64; 6] = [-231.168, 452.3872, -322.668, 107.23, -16.8, 1.0];
    const CLOSE: [f64; 3] = [0.025, -0.35, 1.0];

    fn roots(coeffs: &[f64], method: Method, num_intervals: usize) -> RootSet {
        Solver::new(SolverConfig::default())
            .unwrap()
            .roots(
                &Poly::new(coeffs),
                -10.0,
                10.0,
                method,
                num_intervals,
                &RootFilter::default(),
            )
            .unwrap()
    }

    fn assert_roots(actual: &RootSet, expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn quadratic_bisection() {
        assert_roots(&roots(&QUADRATIC, Method::Bisection, 100), &[2.0, 3.0]);
    }

    #[test]
    fn quintic_bisection() {
        assert_roots(
            &roots(&QUINTIC, Method::Bisection, 100),
            &[1.2, 2.5, 3.2, 4.3, 5.6],
        );
    }

    #[test]
    fn close_roots_bisection() {
        assert_roots(&roots(&CLOSE, Method::Bisection, 100), &[0.1, 0.25]);
    }

    #[test]
    fn open_methods_on_the_quadratic() {
        assert_roots(&roots(&QUADRATIC, Method::Secant, 100), &[2.0, 3.0]);
        assert_roots(&roots(&QUADRATIC, Method::Newton, 100), &[2.0, 3.0]);
    }

    #[test]
    fn open_methods_only_report_real_roots() {
        let expected = [1.2, 2.5, 3.2, 4.3, 5.6];
        for method in [Method::Secant, Method::Newton] {
            let found = roots(&QUINTIC, method, 100);
            assert!(!found.is_empty());
            for r in &found {
                assert!(
                    expected.iter().any(|e| (r - e).abs() < 1e-9),
                    "{method} reported {r}"
                );
            }
        }
    }

    #[test]
    fn tangent_root_is_missed_by_bisection() {
        // (x - 1.05)^2: the double root sits strictly inside [1.0, 1.2].
        let found = roots(&[1.05 * 1.05, -2.1, 1.0], Method::Bisection, 100);
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn raw_results_have_one_slot_per_interval() {
        let raw = solve_roots(-10.0, 10.0, &QUADRATIC, 0, 100).unwrap();
        assert_eq!(raw.len(), 100);
        assert!(raw.iter().filter(|x| !x.is_nan()).count() >= 2);
        assert_roots(&process_roots(&raw, 10_000.0, 4), &[2.0, 3.0]);
    }

    #[test]
    fn invalid_range_fails_up_front() {
        for (low, high, n) in [(5.0, 5.0, 100), (5.0, -5.0, 100), (-10.0, 10.0, 0)] {
            assert!(matches!(
                solve_roots(low, high, &QUADRATIC, 0, n),
                Err(Error::InvalidRange { .. })
            ));
        }
    }

    #[test]
    fn bad_inputs() {
        assert!(matches!(
            solve_roots(-10.0, 10.0, &QUADRATIC, 7, 100),
            Err(Error::UnknownMethod { code: 7 })
        ));
        assert!(matches!(
            solve_roots(-10.0, 10.0, &[1.0, f64::NAN, 1.0], 0, 100),
            Err(Error::NonFiniteCoefficient { index: 1, .. })
        ));
        assert!(matches!(
            Solver::new(SolverConfig::default().with_max_iter(0)),
            Err(Error::InvalidConfig { .. })
        ));
        let solver = Solver::new(SolverConfig::default()).unwrap();
        assert!(matches!(
            solver.roots(
                &Poly::new(QUADRATIC),
                -10.0,
                10.0,
                Method::Bisection,
                10,
                &RootFilter::new(-1.0, 4)
            ),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn bound_filters_runaways() {
        // Root at 20000, found by bisection on a wide range, then filtered.
        let poly = Poly::new([-20_000.0, 1.0]);
        let solver = Solver::new(SolverConfig::default().with_num_threads(2)).unwrap();
        let raw = solver
            .raw_roots(&poly, -30_000.0, 30_000.0, Method::Bisection, 7)
            .unwrap();
        assert_eq!(raw.iter().filter(|r| r.is_found()).count(), 1);
        assert!(aggregate(raw.clone(), &RootFilter::default()).is_empty());
        assert_roots(&aggregate(raw, &RootFilter::new(1e6, 4)), &[20_000.0]);
    }

    #[test]
    fn process_roots_matches_script_postprocessing() {
        let raw = [f64::NAN, 2.00000001, 1.99999999, 12_345.0, -10_000.0, 3.0, f64::NAN];
        assert_roots(&process_roots(&raw, 10_000.0, 4), &[2.0, 3.0]);
    }
}
