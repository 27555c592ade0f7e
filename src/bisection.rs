use crate::{Interval, Miss, Tolerance, brackets};

/// Finds a root of `f` in `interval` by repeated halving.
///
/// Requires the endpoints to bracket a sign change (an endpoint that is
/// exactly zero counts). Stops as soon as the bracket's half-width or
/// `|f(mid)|` drops below the tolerance, and returns the midpoint. The
/// result therefore always lies in `interval`.
///
/// A root where `f` touches zero without crossing it (a double root, say)
/// gives no sign change, so it is never found unless it sits exactly on an
/// endpoint.
pub(crate) fn find_root<F>(f: F, interval: Interval, tol: &Tolerance) -> Result<f64, Miss>
where
    F: Fn(f64) -> f64,
{
    let mut lower = interval.lower;
    let mut upper = interval.upper;
    let mut lower_val = f(lower);
    let upper_val = f(upper);

    if !brackets(lower_val, upper_val) {
        return Err(Miss::NotBracketed);
    }

    for _ in 0..tol.max_iter {
        let mid = Interval { lower, upper }.midpoint();
        let mid_val = f(mid);

        if mid_val.abs() < tol.value || (upper - lower) / 2.0 < tol.value {
            return Ok(mid);
        }
        // The midpoint of adjacent floats is one of them; there's nothing
        // left to split.
        if mid <= lower || mid >= upper {
            return Ok(mid);
        }

        if brackets(lower_val, mid_val) {
            upper = mid;
        } else {
            lower = mid;
            lower_val = mid_val;
        }
    }

    Err(Miss::NotConverged)
}
