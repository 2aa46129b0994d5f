//! Numeric types for minimax approximation.
//!
//! This module defines the [`Value`] trait, which abstracts the floating point
//! types a Remez run can be carried out in, ensuring compatibility with nalgebra,
//! floating-point operations, and formatting.
//!
//! # Traits
//!
//! - [`Value`]: Extends `FloatCore`, `Scalar`, and `RealField` to provide:
//!   - A canonical `two()` constant.
//!   - `try_cast` for safe type conversion with error handling.
//!   - Unambiguous `abs`, `abs_sub` and `is_finite_value` helpers.
//!
//! # Example
//!
//! ```rust
//! use minimax::value::Value;
//!
//! let two = f64::two();
//! let half = f64::try_cast(0.5).unwrap();
//! assert_eq!(Value::abs(-two * half), 1.0);
//! ```
use crate::error::Error;

/// Numeric type for approximations
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
    + std::fmt::LowerExp
{
    /// Returns the value 2.0
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Get the absolute value for a numeric type
    #[must_use]
    fn abs(self) -> Self {
        nalgebra::ComplexField::abs(self)
    }

    /// Returns the absolute difference between two values.
    #[must_use]
    fn abs_sub(self, other: Self) -> Self {
        nalgebra::ComplexField::abs(self - other)
    }

    /// Returns true if the value is neither infinite nor NaN
    fn is_finite_value(&self) -> bool {
        num_traits::float::FloatCore::is_finite(*self)
    }

    /// Returns the sign of the value as a numeric type
    ///
    /// This function returns -1 for negative values, 1 for positive values, and NaN for NaN values.
    #[must_use]
    fn f_signum(&self) -> Self {
        match self {
            _ if self.is_nan() => Self::nan(),
            _ if nalgebra::RealField::is_sign_negative(self) => -Self::one(),
            _ => Self::one(),
        }
    }

    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        Self::try_cast(n).unwrap_or(Self::infinity())
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
        + std::fmt::LowerExp
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two() {
        assert_eq!(f64::two(), 2.0);
        assert_eq!(f32::two(), 2.0);
    }

    #[test]
    fn test_signum() {
        assert_eq!(Value::f_signum(&-3.0), -1.0);
        assert_eq!(Value::f_signum(&0.0), 1.0);
        assert!(Value::f_signum(&f64::NAN).is_nan());
    }

    #[test]
    fn test_finite() {
        assert!(Value::is_finite_value(&1.0e300));
        assert!(!Value::is_finite_value(&f64::INFINITY));
        assert!(!Value::is_finite_value(&f64::NAN));
    }

    #[test]
    fn test_casts() {
        assert_eq!(f64::from_positive_int(200), 200.0);
        assert_eq!(f32::try_cast(0.5).ok(), Some(0.5_f32));
        assert_eq!(f32::try_cast(3usize).ok(), Some(3.0));
    }
}
