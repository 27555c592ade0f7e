use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{Error, ExecutionContext, Interval, Method, Miss, Poly, RawResult, Result, Tolerance};

/// Per-run tallies of how the sub-intervals turned out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub found: usize,
    pub not_bracketed: usize,
    pub degenerate: usize,
    pub not_converged: usize,
}

impl DispatchStats {
    fn record(&mut self, outcome: &std::result::Result<f64, Miss>) {
        match outcome {
            Ok(_) => self.found += 1,
            Err(Miss::NotBracketed) => self.not_bracketed += 1,
            Err(Miss::Degenerate) => self.degenerate += 1,
            Err(Miss::NotConverged) => self.not_converged += 1,
        }
    }

    pub fn missed(&self) -> usize {
        self.not_bracketed + self.degenerate + self.not_converged
    }
}

/// The complete output of one dispatch: one raw result per sub-interval, in
/// sub-interval order.
#[derive(Clone, Debug, PartialEq)]
pub struct Dispatch {
    pub results: Vec<RawResult>,
    pub stats: DispatchStats,
}

/// Solves every sub-interval in parallel on `ctx` and waits for all of them.
///
/// Slot `i` of the output is written only by the worker handling
/// `intervals[i]`. A sub-interval that finds nothing just leaves
/// [`RawResult::NotFound`] in its slot.
///
/// # Errors
///
/// [`Error::WorkerPanicked`] if any worker panics; in that case no results
/// are returned at all.
pub fn dispatch(
    ctx: &ExecutionContext,
    poly: &Poly,
    intervals: &[Interval],
    method: Method,
    tol: &Tolerance,
) -> Result<Dispatch> {
    let slots = fill_slots(ctx, intervals, Err(Miss::NotConverged), |interval| {
        let outcome = method.find_root(poly, interval, tol);
        if let Err(miss) = outcome {
            trace!(lower = interval.lower, upper = interval.upper, %miss, "no root");
        }
        outcome
    })?;

    let mut stats = DispatchStats::default();
    for outcome in &slots {
        stats.record(outcome);
    }
    debug!(
        %method,
        intervals = intervals.len(),
        found = stats.found,
        not_bracketed = stats.not_bracketed,
        degenerate = stats.degenerate,
        not_converged = stats.not_converged,
        "dispatch complete"
    );

    Ok(Dispatch {
        results: slots.into_iter().map(RawResult::from).collect(),
        stats,
    })
}

/// Runs `solve` once per interval on `ctx`, writing the `i`th answer into
/// slot `i` of a vector that starts out filled with `empty`.
///
/// If any call panics, the slots are discarded and the panic becomes
/// [`Error::WorkerPanicked`].
pub(crate) fn fill_slots<T, F>(
    ctx: &ExecutionContext,
    intervals: &[Interval],
    empty: T,
    solve: F,
) -> Result<Vec<T>>
where
    T: Clone + Send,
    F: Fn(Interval) -> T + Sync,
{
    let mut slots = vec![empty; intervals.len()];
    let run = || {
        slots
            .par_iter_mut()
            .zip(intervals.par_iter())
            .for_each(|(slot, &interval)| *slot = solve(interval));
    };
    panic::catch_unwind(AssertUnwindSafe(|| ctx.install(run)))
        .map_err(|_| Error::WorkerPanicked)?;
    Ok(slots)
}
