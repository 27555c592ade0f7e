use crate::{Interval, Miss, SINGULAR_THRESHOLD, Tolerance};

/// Newton's method started from the midpoint of `interval`.
///
/// `f` returns the value and the derivative at a point. Like the secant
/// method, the iterates are free to leave `interval`.
pub(crate) fn find_root<F>(f: F, interval: Interval, tol: &Tolerance) -> Result<f64, Miss>
where
    F: Fn(f64) -> (f64, f64),
{
    let mut x = interval.midpoint();

    for _ in 0..tol.max_iter {
        let (val, deriv) = f(x);
        if val.abs() < tol.value {
            return Ok(x);
        }
        if deriv.is_nan() || deriv.abs() < SINGULAR_THRESHOLD {
            return Err(Miss::Degenerate);
        }

        let x_next = x - val / deriv;
        if !x_next.is_finite() {
            return Err(Miss::Degenerate);
        }
        if (x_next - x).abs() < tol.value {
            return Ok(x_next);
        }
        x = x_next;
    }

    Err(Miss::NotConverged)
}
