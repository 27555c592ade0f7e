//! Utilities for fuzz and/or property testing using `arbitrary`.

use arbitrary::Unstructured;

use crate::Poly;

fn check_finite(f: f64) -> Result<f64, arbitrary::Error> {
    if f.is_finite() {
        Ok(f)
    } else {
        Err(arbitrary::Error::IncorrectFormat)
    }
}

pub fn finite_float(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    check_finite(u.arbitrary()?)
}

/// Generate a search range `(low, high, num_intervals)` that `partition`
/// accepts, with sub-intervals that are wide compared to the endpoints'
/// rounding error.
pub fn search_range(u: &mut Unstructured<'_>) -> Result<(f64, f64, usize), arbitrary::Error> {
    let low: i32 = u.int_in_range(-1_000_000..=1_000_000)?;
    let span: i32 = u.int_in_range(1..=1_000_000)?;
    let num_intervals: usize = u.int_in_range(1..=1000)?;
    let low = f64::from(low) / 1000.0;
    Ok((low, low + f64::from(span) / 1000.0, num_intervals))
}

/// Generate a polynomial with between one and four simple roots, returned
/// in increasing order.
///
/// The roots are distinct half-integers in `[-5.5, 5.5]`, so they're at
/// least one apart and none of them is an integer. The leading coefficient
/// is a small power of two (possibly negative), which keeps every
/// coefficient exactly representable.
pub fn poly_with_separated_roots(
    u: &mut Unstructured<'_>,
) -> Result<(Poly, Vec<f64>), arbitrary::Error> {
    let count: usize = u.int_in_range(1..=4)?;
    let mut roots = Vec::with_capacity(count);
    while roots.len() < count {
        let r: i32 = u.int_in_range(-6..=5)?;
        let r = f64::from(r) + 0.5;
        if !roots.contains(&r) {
            roots.push(r);
        } else if u.is_empty() {
            // Out of entropy, and we'd keep drawing the same root.
            break;
        }
    }
    roots.sort_by(f64::total_cmp);

    let mut coeffs = vec![1.0];
    for &r in &roots {
        mul(&mut coeffs, r);
    }

    let scale = 2.0f64.powi(u.int_in_range(-2..=2)?);
    let sign = if u.arbitrary()? { -1.0 } else { 1.0 };
    Ok((Poly::new(coeffs) * (sign * scale), roots))
}

// Multiplies the polynomial in `coeffs` by (x - root).
fn mul(coeffs: &mut Vec<f64>, root: f64) {
    coeffs.push(0.0);
    for i in (1..coeffs.len()).rev() {
        coeffs[i] = coeffs[i - 1] - root * coeffs[i];
    }
    coeffs[0] *= -root;
}
