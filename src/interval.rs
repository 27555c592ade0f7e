use crate::{Error, Result};

/// A closed sub-interval `[lower, upper]` of the search range.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Left endpoint.
    pub lower: f64,
    /// Right endpoint.
    pub upper: f64,
}

impl Interval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn midpoint(&self) -> f64 {
        // Overflow-proof when both endpoints have the same sign.
        if (self.lower > 0.0) == (self.upper > 0.0) {
            self.lower + (self.upper - self.lower) / 2.0
        } else {
            (self.lower + self.upper) / 2.0
        }
    }

    /// Is `x` in this interval, endpoints included?
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// Splits `[low, high]` into `num_intervals` contiguous sub-intervals of
/// equal width, ordered left to right.
///
/// Neighbouring sub-intervals share their endpoint exactly, the first one
/// starts at `low` and the last one ends at `high`.
///
/// # Errors
///
/// [`Error::InvalidRange`] unless `low` and `high` are finite, `low < high`,
/// `num_intervals >= 1` and every sub-interval has a positive width once its
/// bounds are rounded to `f64`.
pub fn partition(low: f64, high: f64, num_intervals: usize) -> Result<Vec<Interval>> {
    let invalid = || Error::InvalidRange {
        low,
        high,
        num_intervals,
    };

    if !(low.is_finite() && high.is_finite()) || low >= high || num_intervals == 0 {
        return Err(invalid());
    }
    let width = (high - low) / num_intervals as f64;
    if !(width.is_finite() && width > 0.0) {
        return Err(invalid());
    }

    let bound = |i: usize| {
        if i == num_intervals {
            high
        } else {
            low + i as f64 * width
        }
    };
    let intervals: Vec<Interval> = (0..num_intervals)
        .map(|i| Interval {
            lower: bound(i),
            upper: bound(i + 1),
        })
        .collect();
    // Near large endpoints the width can be below the float spacing, and
    // then neighbouring bounds round to the same value.
    if intervals.iter().any(|iv| iv.lower >= iv.upper) {
        return Err(invalid());
    }
    Ok(intervals)
}
