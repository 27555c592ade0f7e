//! Turning per-interval results into a set of roots.
//!
//! The pipeline is three independent stages: [`within_bound`] drops misses
//! and runaway values, [`round_to`] fixes the decimal resolution, and
//! [`dedup`] collapses the copies of a root found by several sub-intervals.
//! [`aggregate`] runs all three.

use crate::{RawResult, RootFilter};

/// Deduplicated, rounded roots, in increasing order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootSet {
    roots: Vec<f64>,
}

impl RootSet {
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.roots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.roots.iter()
    }

    /// Is there a root equal to `x` once `x` is rounded to `precision`
    /// digits?
    pub fn contains_rounded(&self, x: f64, precision: i32) -> bool {
        let x = round_to(x, precision);
        self.roots.binary_search_by(|r| r.total_cmp(&x)).is_ok()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.roots
    }
}

impl IntoIterator for RootSet {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

/// The found roots strictly between `-bound` and `bound`.
///
/// Misses are dropped, and so is anything non-finite.
pub fn within_bound(
    raw: impl IntoIterator<Item = RawResult>,
    bound: f64,
) -> impl Iterator<Item = f64> {
    raw.into_iter()
        .filter_map(RawResult::root)
        .filter(move |&x| -bound < x && x < bound)
}

/// Rounds `x` to `precision` decimal digits, half away from zero.
///
/// A negative precision rounds to tens, hundreds, and so on. If `x` can't
/// be scaled without overflow it's already coarser than the requested
/// resolution, so it's returned as is.
pub fn round_to(x: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    let scaled = x * scale;
    if !scaled.is_finite() || scale == 0.0 {
        return x;
    }
    scaled.round() / scale
}

/// Collapses values that are the same root at `precision` digits.
///
/// Values are sorted and grouped: a value closer than half a rounding unit to
/// the previous one joins its group, so two raw roots nearer than that always
/// come out as one, even if they happen to round to different neighbours.
/// Each group contributes its smallest value, rounded, and equal rounded
/// values are only kept once.
///
/// Groups chain: a run of values each within half a unit of the last one is
/// a single group, however far apart its ends are. So
/// `[1.0, 1.00004, 1.00008, 1.00012]` at 4 digits gives just `[1.0]`.
pub fn dedup(values: impl IntoIterator<Item = f64>, precision: i32) -> Vec<f64> {
    let half_unit = 0.5 * 10f64.powi(-precision);
    let mut values: Vec<f64> = values.into_iter().collect();
    values.sort_by(f64::total_cmp);

    let mut out: Vec<f64> = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for x in values {
        let same_group = prev.is_some_and(|p| x - p < half_unit);
        prev = Some(x);
        if same_group {
            continue;
        }

        let rounded = round_to(x, precision);
        if out.last() != Some(&rounded) {
            out.push(rounded);
        }
    }
    out
}

/// Filters, rounds and deduplicates raw per-interval results.
pub fn aggregate(raw: impl IntoIterator<Item = RawResult>, filter: &RootFilter) -> RootSet {
    RootSet {
        roots: dedup(within_bound(raw, filter.bound), filter.precision),
    }
}
