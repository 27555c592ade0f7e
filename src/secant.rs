use crate::{Interval, Miss, SINGULAR_THRESHOLD, Tolerance};

/// Secant iteration started from the two endpoints of `interval`.
///
/// There is no bracketing requirement, which also means nothing keeps the
/// iterates inside `interval`: the returned root can be anywhere, including
/// far outside the search range.
pub(crate) fn find_root<F>(f: F, interval: Interval, tol: &Tolerance) -> Result<f64, Miss>
where
    F: Fn(f64) -> f64,
{
    let mut x_prev = interval.lower;
    let mut x_curr = interval.upper;
    let mut f_prev = f(x_prev);
    let mut f_curr = f(x_curr);

    for _ in 0..tol.max_iter {
        let denom = f_curr - f_prev;
        if denom.is_nan() || denom.abs() < SINGULAR_THRESHOLD {
            return Err(Miss::Degenerate);
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        if !x_next.is_finite() {
            return Err(Miss::Degenerate);
        }
        let f_next = f(x_next);

        if f_next.abs() < tol.value || (x_next - x_curr).abs() < tol.value {
            return Ok(x_next);
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    Err(Miss::NotConverged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Poly;

    fn iv(lower: f64, upper: f64) -> Interval {
        Interval { lower, upper }
    }

    #[test]
    fn converges_from_endpoints() {
        let p = Poly::new([6.0, -5.0, 1.0]);
        let r = find_root(|x| p.eval(x), iv(2.8, 3.3), &Tolerance::default()).unwrap();
        assert!((r - 3.0).abs() < 1e-9);
    }

    #[test]
    fn may_leave_the_interval() {
        let p = Poly::new([6.0, -5.0, 1.0]);
        let r = find_root(|x| p.eval(x), iv(-1.0, -0.8), &Tolerance::default()).unwrap();
        assert!((r - 2.0).abs() < 1e-9);
    }

    #[test]
    fn flat_secant_is_degenerate() {
        // Symmetric around the vertex, so f(a) == f(b).
        let p = Poly::new([6.0, -5.0, 1.0]);
        assert_eq!(
            find_root(|x| p.eval(x), iv(2.25, 2.75), &Tolerance::default()),
            Err(Miss::Degenerate)
        );
        assert_eq!(
            find_root(|_| 1.0, iv(0.0, 1.0), &Tolerance::default()),
            Err(Miss::Degenerate)
        );
    }

    #[test]
    fn iteration_cap() {
        let p = Poly::new([-2.0, 0.0, 1.0]);
        let tight = Tolerance {
            value: 1e-10,
            max_iter: 1,
        };
        assert_eq!(
            find_root(|x| p.eval(x), iv(0.0, 10.0), &tight),
            Err(Miss::NotConverged)
        );
    }
}
