use crate::{Error, Interval, Miss, Poly, Tolerance, bisection, newton, secant};

/// Which iterative solver to run on every sub-interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Bracketing bisection. Slow but never leaves its interval.
    #[default]
    Bisection,
    /// Secant iteration from the two endpoints.
    Secant,
    /// Newton's method from the midpoint.
    Newton,
}

impl Method {
    /// The code used for this method at the numeric call boundary.
    pub fn code(self) -> i32 {
        match self {
            Method::Bisection => 0,
            Method::Secant => 1,
            Method::Newton => 2,
        }
    }

    /// Does this method only report roots inside the interval it was given?
    pub fn is_bracketing(self) -> bool {
        matches!(self, Method::Bisection)
    }

    /// Attempts to find one root of `poly` starting from `interval`.
    pub fn find_root(self, poly: &Poly, interval: Interval, tol: &Tolerance) -> Result<f64, Miss> {
        match self {
            Method::Bisection => bisection::find_root(|x| poly.eval(x), interval, tol),
            Method::Secant => secant::find_root(|x| poly.eval(x), interval, tol),
            Method::Newton => newton::find_root(|x| poly.eval_with_deriv(x), interval, tol),
        }
    }
}

impl TryFrom<i32> for Method {
    type Error = Error;

    fn try_from(code: i32) -> Result<Method, Error> {
        match code {
            0 => Ok(Method::Bisection),
            1 => Ok(Method::Secant),
            2 => Ok(Method::Newton),
            _ => Err(Error::UnknownMethod { code }),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Method::Bisection => "bisection",
            Method::Secant => "secant",
            Method::Newton => "newton",
        })
    }
}

/// The outcome of one sub-interval.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RawResult {
    /// A candidate root.
    Found(f64),
    /// No root: not bracketed, degenerate, or out of iterations.
    #[default]
    NotFound,
}

impl RawResult {
    /// The value used for [`RawResult::NotFound`] at the numeric call
    /// boundary.
    pub const SENTINEL: f64 = f64::NAN;

    pub fn root(self) -> Option<f64> {
        match self {
            RawResult::Found(x) => Some(x),
            RawResult::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, RawResult::Found(_))
    }

    /// Encodes this result as a plain float, with NaN for "not found".
    pub fn to_sentinel(self) -> f64 {
        self.root().unwrap_or(Self::SENTINEL)
    }

    /// Decodes a plain float; any NaN means "not found".
    pub fn from_sentinel(x: f64) -> RawResult {
        if x.is_nan() {
            RawResult::NotFound
        } else {
            RawResult::Found(x)
        }
    }
}

impl From<Result<f64, Miss>> for RawResult {
    fn from(res: Result<f64, Miss>) -> RawResult {
        match res {
            Ok(x) => RawResult::Found(x),
            Err(_) => RawResult::NotFound,
        }
    }
}
