/// A real polynomial with a dense coefficient vector.
///
/// The constant coefficient comes first, then the linear coefficient, and
/// so on. So `[6.0, -5.0, 1.0]` is `x^2 - 5x + 6`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Poly {
    coeffs: Vec<f64>,
}

impl Poly {
    /// Creates a new polynomial with the provided coefficients.
    pub fn new(coeffs: impl Into<Vec<f64>>) -> Poly {
        Poly {
            coeffs: coeffs.into(),
        }
    }

    /// The coefficients of this polynomial.
    ///
    /// In the returned slice, the coefficient of `x^i` is at index `i`.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// The number of coefficients minus one.
    ///
    /// Trailing zero coefficients are not trimmed, and the empty polynomial
    /// has degree zero.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Evaluates this polynomial at a point.
    pub fn eval(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        for c in self.coeffs.iter().rev() {
            // It would be nice to use `f64::mul_add` here, but it's slow on
            // architectures that don't have a dedicated instruction.
            acc = acc * x + c;
        }
        acc
    }

    /// Evaluates this polynomial and its derivative at a point, in a single
    /// Horner pass.
    pub fn eval_with_deriv(&self, x: f64) -> (f64, f64) {
        let mut val = 0.0;
        let mut deriv = 0.0;
        for c in self.coeffs.iter().rev() {
            deriv = deriv * x + val;
            val = val * x + c;
        }
        (val, deriv)
    }

    /// Compute the derivative of this polynomial, as a polynomial with
    /// one less coefficient.
    pub fn deriv(&self) -> Poly {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| i as f64 * c)
            .collect::<Vec<_>>();
        Poly { coeffs }
    }

    /// Returns the largest absolute value of any coefficient.
    ///
    /// Always returns a non-negative number, or NaN if some coefficient is NaN.
    pub fn magnitude(&self) -> f64 {
        let mut max = 0.0f64;
        for c in &self.coeffs {
            max = max.max(c.abs());
        }
        max
    }

    /// Are all the coefficients finite?
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    /// The index and value of the first NaN or infinite coefficient.
    pub fn first_non_finite(&self) -> Option<(usize, f64)> {
        self.coeffs
            .iter()
            .copied()
            .enumerate()
            .find(|(_, c)| !c.is_finite())
    }
}

impl From<Vec<f64>> for Poly {
    fn from(coeffs: Vec<f64>) -> Poly {
        Poly { coeffs }
    }
}

impl From<&[f64]> for Poly {
    fn from(coeffs: &[f64]) -> Poly {
        Poly::new(coeffs)
    }
}

impl std::ops::MulAssign<f64> for Poly {
    fn mul_assign(&mut self, scale: f64) {
        for c in &mut self.coeffs {
            *c *= scale;
        }
    }
}

impl std::ops::Mul<f64> for Poly {
    type Output = Poly;

    fn mul(mut self, scale: f64) -> Poly {
        self *= scale;
        self
    }
}

impl std::ops::Mul<f64> for &Poly {
    type Output = Poly;

    fn mul(self, scale: f64) -> Poly {
        self.clone() * scale
    }
}
