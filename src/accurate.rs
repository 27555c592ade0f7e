//! Exact polynomial evaluation using arbitrary-precision arithmetic.
//!
//! This is far too slow for solving, but it makes a good referee: a root
//! reported by a floating-point solver can be checked against the exact sign
//! of the polynomial on either side of it.

use dashu_float::{FBig, round::Rounded};

use crate::Poly;

#[derive(Clone, Debug)]
pub struct AccuPoly {
    coeffs: Vec<FBig>,
}

// Every finite `f64` is exactly an `FBig`.
fn exact(x: f64) -> FBig {
    let Ok(x) = FBig::try_from(x) else {
        panic!("{x} is not finite");
    };
    let Rounded::Exact(x) = x.with_precision(0) else {
        unreachable!()
    };
    x
}

impl AccuPoly {
    /// # Panics
    ///
    /// If any coefficient is not finite.
    pub fn new(coeffs: impl IntoIterator<Item = f64>) -> Self {
        Self {
            coeffs: coeffs.into_iter().map(exact).collect(),
        }
    }

    /// Evaluate this polynomial at the given point, as a correctly-rounded
    /// `f64`.
    pub fn eval(&self, x: f64) -> f64 {
        self.eval_exact(x).to_f64().value()
    }

    /// Evaluate this polynomial at the given point, exactly and very slowly.
    pub fn eval_exact(&self, x: f64) -> FBig {
        let mut coeffs = self.coeffs.iter().rev();
        let Some(c) = coeffs.next() else {
            return exact(0.0);
        };
        let mut ret = c.clone();
        let x = exact(x);
        for c in coeffs {
            ret *= &x;
            ret += c;
        }
        ret
    }

    /// Does the exact polynomial change sign on `[lower, upper]`, or vanish
    /// at one of the ends?
    pub fn brackets_root(&self, lower: f64, upper: f64) -> bool {
        let zero = exact(0.0);
        let lower_val = self.eval_exact(lower);
        let upper_val = self.eval_exact(upper);
        lower_val == zero || upper_val == zero || (lower_val > zero) != (upper_val > zero)
    }
}

impl From<&Poly> for AccuPoly {
    fn from(p: &Poly) -> AccuPoly {
        AccuPoly::new(p.coeffs().iter().copied())
    }
}
