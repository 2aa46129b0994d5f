use std::borrow::Cow;

use crate::{
    basis::{expand, Parity},
    display::{self, DEFAULT_PRECISION},
    error::{Error, Result},
    value::Value,
};

/// Represents a polynomial in the dense monomial basis.
///
/// This is the evaluation form of a minimax approximation: every power of `x` up to
/// the degree has a coefficient, including the zeros implied by a [`Parity`] restriction.
///
/// # Type Parameters
/// - `'a`: Lifetime for borrowed coefficients, if used.
/// - `T`: Numeric type for the coefficients, default is `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<'a, T: Value = f64> {
    coefficients: Cow<'a, [T]>,
}
impl<'a, T: Value> Polynomial<'a, T> {
    /// Creates a polynomial from dense coefficients, lowest power first.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSetting`] if no coefficients are given.
    ///
    /// # Example
    /// ```
    /// # use minimax::Polynomial;
    /// let poly = Polynomial::new(&[1.0, 2.0, 3.0][..]).unwrap(); // 1 + 2x + 3x²
    /// assert_eq!(poly.y(2.0), 17.0);
    /// ```
    pub fn new(coefficients: impl Into<Cow<'a, [T]>>) -> Result<Self> {
        let coefficients = coefficients.into();
        if coefficients.is_empty() {
            return Err(Error::InvalidSetting {
                name: "coefficients",
                reason: "a polynomial needs at least one coefficient",
            });
        }

        Ok(Self { coefficients })
    }

    /// Creates a polynomial from coefficients solved against a parity-restricted basis.
    ///
    /// See [`crate::basis::expand`] for the padding rules.
    ///
    /// # Errors
    /// Returns an error if no coefficients are given.
    pub fn from_restricted(restricted: &[T], parity: Parity) -> Result<Polynomial<'static, T>> {
        Polynomial::new(expand(restricted, parity))
    }

    /// Borrows dense coefficients that are already known to be non-empty.
    pub(crate) fn borrowed(coefficients: &'a [T]) -> Self {
        debug_assert!(!coefficients.is_empty());
        Self {
            coefficients: Cow::Borrowed(coefficients),
        }
    }

    /// Returns a reference to the polynomial’s coefficients.
    ///
    /// The index of each coefficient is its power of `x`.
    ///
    /// For example in `y(x) = 2x^2 - 3x + 1`;
    /// coefficients = [1.0, -3.0, 2.0]
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// Trailing zero coefficients still count; the degree is structural.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the polynomial at a given x-value using Horner's method.
    ///
    /// # Example
    /// ```
    /// # use minimax::Polynomial;
    /// let poly = Polynomial::new(vec![1.0, 0.0, -0.5]).unwrap();
    /// assert_eq!(poly.y(2.0), -1.0);
    /// ```
    pub fn y(&self, x: T) -> T {
        let mut y = T::zero();
        for &coef in self.coefficients.iter().rev() {
            y = y * x + coef;
        }
        y
    }
}

impl<T: Value> std::fmt::Display for Polynomial<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        display::format_polynomial(f, &self.coefficients, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn test_y() {
        let poly = Polynomial::new(vec![8.0, 7.0, 6.0]).unwrap();
        assert_close!(poly.y(0.0), 8.0);
        assert_close!(poly.y(1.0), 21.0);
        assert_close!(poly.y(2.0), 46.0);
    }

    #[test]
    fn test_from_restricted() {
        let poly = Polynomial::from_restricted(&[1.0, -1.0 / 6.0], Parity::Odd).unwrap();
        assert_eq!(poly.degree(), 3);
        assert_close!(poly.y(1.0), 5.0 / 6.0);
        assert_close!(poly.y(-1.0), -5.0 / 6.0);

        let poly = Polynomial::from_restricted(&[1.0, -0.5], Parity::Even).unwrap();
        assert_eq!(poly.degree(), 2);
        assert_close!(poly.y(2.0), -1.0);
    }

    #[test]
    fn test_empty() {
        assert!(Polynomial::<f64>::new(Vec::new()).is_err());
    }

    #[test]
    fn test_display() {
        let poly = Polynomial::new(vec![2.0, -3.0, 0.0, 4.0]).unwrap();
        assert_eq!(poly.to_string(), "y(x) = 4.00x³ - 3.00x + 2.00");
        assert_eq!(format!("{poly:.1}"), "y(x) = 4.0x³ - 3.0x + 2.0");
    }
}
