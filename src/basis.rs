//! Parity-restricted monomial basis
//!
//! A minimax approximation is solved over a set of `degree + 1` monomials. The set is either
//! every power up to `degree`, or only the odd or only the even powers of `x`:
//!
//! | [`Parity`] | Solved powers          | Effective degree |
//! |------------|------------------------|------------------|
//! | `Full`     | `1, x, x², …, xᵈ`      | `d`              |
//! | `Odd`      | `x, x³, …, x²ᵈ⁺¹`      | `2d + 1`         |
//! | `Even`     | `1, x², …, x²ᵈ`        | `2d`             |
//!
//! Restricting the basis halves the size of the levelled system for functions with a known
//! symmetry (e.g. `sin` is odd, `cos` is even), while still reaching a high effective degree.
//!
//! Coefficients solved against a restricted basis are **restricted coefficients**: index `j`
//! is the coefficient of the `j`th power *present* in the basis. [`expand`] turns them into a
//! dense vector indexed by power.

use nalgebra::MatrixViewMut;

use crate::{
    error::{Error, Result},
    value::Value,
};

/// Which powers of `x` a polynomial is allowed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Parity {
    /// Every power of `x`
    #[default]
    Full,

    /// Only odd powers of `x`. The polynomial satisfies `P(-x) = -P(x)`.
    Odd,

    /// Only even powers of `x`. The polynomial satisfies `P(-x) = P(x)`.
    Even,
}

impl Parity {
    /// Builds a parity from a pair of `odd` / `even` flags.
    ///
    /// # Errors
    /// Returns [`Error::ConflictingParity`] if both flags are set.
    ///
    /// # Example
    /// ```
    /// # use minimax::basis::Parity;
    /// assert_eq!(Parity::from_flags(true, false).unwrap(), Parity::Odd);
    /// assert_eq!(Parity::from_flags(false, false).unwrap(), Parity::Full);
    /// assert!(Parity::from_flags(true, true).is_err());
    /// ```
    pub fn from_flags(odd: bool, even: bool) -> Result<Self> {
        match (odd, even) {
            (true, true) => Err(Error::ConflictingParity),
            (true, false) => Ok(Parity::Odd),
            (false, true) => Ok(Parity::Even),
            (false, false) => Ok(Parity::Full),
        }
    }

    /// Power of `x` carried by the `j`th restricted coefficient.
    #[must_use]
    pub const fn power(self, j: usize) -> usize {
        match self {
            Parity::Full => j,
            Parity::Odd => 2 * j + 1,
            Parity::Even => 2 * j,
        }
    }

    /// Degree of the polynomial described by `degree + 1` restricted coefficients.
    #[must_use]
    pub const fn effective_degree(self, degree: usize) -> usize {
        self.power(degree)
    }

    /// Number of dense coefficients produced by [`expand`] for a given degree.
    #[must_use]
    pub const fn dense_len(self, degree: usize) -> usize {
        self.effective_degree(degree) + 1
    }

    /// Human readable label, used by the command line tool
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Parity::Full => "all powers of x",
            Parity::Odd => "odd powers of x",
            Parity::Even => "even powers of x",
        }
    }
}

/// Monomial basis restricted to a [`Parity`].
///
/// Used to fill the rows of the levelled Vandermonde-style system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonomialBasis {
    parity: Parity,
}
impl MonomialBasis {
    /// Creates a basis restricted to the given parity
    #[must_use]
    pub const fn new(parity: Parity) -> Self {
        Self { parity }
    }

    /// Populates the first `k` columns of a matrix row with this basis evaluated at `x`.
    ///
    /// Powers are accumulated by repeated multiplication (by `x`, or `x²` under a parity
    /// restriction) rather than with `powi`.
    pub fn fill_matrix_row<
        T: Value,
        R: nalgebra::Dim,
        C: nalgebra::Dim,
        RS: nalgebra::Dim,
        CS: nalgebra::Dim,
    >(
        &self,
        k: usize,
        x: T,
        mut row: MatrixViewMut<T, R, C, RS, CS>,
    ) {
        let step = match self.parity {
            Parity::Full => x,
            Parity::Odd | Parity::Even => x * x,
        };

        let mut value = match self.parity {
            Parity::Odd => x,
            Parity::Full | Parity::Even => T::one(),
        };

        for j in 0..k.min(row.ncols()) {
            row[j] = value;
            value *= step;
        }
    }
}

/// Expands restricted coefficients into a dense, ascending-power coefficient vector.
///
/// Powers excluded by the parity restriction are filled with explicit zeros:
/// - `Full`: returned unchanged.
/// - `Odd`: `[0, c₀, 0, c₁, …, 0, c_d]` - the constant term is zero.
/// - `Even`: `[c₀, 0, c₁, 0, …, c_d]` - no trailing zero after the last coefficient.
///
/// The output always has [`Parity::dense_len`] entries for `restricted.len() - 1`.
/// An empty input expands to an empty output.
///
/// # Example
/// ```
/// # use minimax::basis::{expand, Parity};
/// assert_eq!(expand(&[1.0, 2.0], Parity::Odd), vec![0.0, 1.0, 0.0, 2.0]);
/// assert_eq!(expand(&[1.0, 2.0], Parity::Even), vec![1.0, 0.0, 2.0]);
/// ```
#[must_use]
pub fn expand<T: Value>(restricted: &[T], parity: Parity) -> Vec<T> {
    let Some(degree) = restricted.len().checked_sub(1) else {
        return Vec::new();
    };

    let mut dense = vec![T::zero(); parity.dense_len(degree)];
    for (j, &c) in restricted.iter().enumerate() {
        dense[parity.power(j)] = c;
    }
    dense
}
