//! Assembly and solution of the levelled Remez system
//!
//! For a reference set `x_0 < … < x_{m-1}` (`m = degree + 2`) the unknowns are the
//! `degree + 1` restricted coefficients `c_j` and the levelled error `E`:
//!
//! ```text
//! Σ c_j φ_j(x_i) + (-1)^(i+1) E = f(x_i),    i = 0..m-1
//! ```
//!
//! where `φ_j` are the basis functions selected by the [`Parity`](crate::basis::Parity).
//! The alternating column forces the error of the solution to alternate in sign across the
//! reference set, which is what drives the exchange towards equioscillation.
use nalgebra::{DMatrix, DVector};

use crate::{basis::MonomialBasis, value::Value};

/// Default limit on the condition number of the levelled system
pub const DEFAULT_MAX_CONDITION: f64 = 1e14;

/// Why a levelled system could not be solved
#[derive(Debug, Clone, PartialEq)]
pub enum SolveFailure<T: Value> {
    /// Gaussian elimination hit a zero pivot
    Singular,

    /// The ratio of the largest to smallest singular value exceeds the configured limit
    IllConditioned {
        /// Estimated condition number
        condition: T,
        /// Configured limit
        limit: T,
    },

    /// The solution contains NaN or infinite entries
    NonFinite,

    /// The reference points are not strictly ascending
    UnorderedReference,
}

impl<T: Value> std::fmt::Display for SolveFailure<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveFailure::Singular => write!(f, "matrix is singular"),
            SolveFailure::IllConditioned { condition, limit } => {
                write!(f, "condition number {condition:.3e} exceeds {limit:.3e}")
            }
            SolveFailure::NonFinite => write!(f, "solution is not finite"),
            SolveFailure::UnorderedReference => {
                write!(f, "reference points are repeated or out of order")
            }
        }
    }
}

/// Solution of a levelled system
#[derive(Debug, Clone, PartialEq)]
pub struct LevelledSolution<T: Value> {
    /// Restricted coefficients, lowest power first
    pub coefficients: Vec<T>,

    /// Signed levelled error `E`
    pub levelled_error: T,
}

/// The square system `A·[c, E]ᵀ = f` for one reference set.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelledSystem<T: Value> {
    matrix: DMatrix<T>,
    rhs: DVector<T>,
    ordered: bool,
}

impl<T: Value> LevelledSystem<T> {
    /// Assembles the system for a reference set and the target values at those points.
    ///
    /// `reference` and `values` must have the same length `m ≥ 1`; the basis supplies
    /// `m - 1` columns and the last column carries the alternating signs of `E`.
    /// A reference that is not strictly ascending is rejected by [`LevelledSystem::solve`].
    #[must_use]
    pub fn new(basis: MonomialBasis, reference: &[T], values: &[T]) -> Self {
        let m = reference.len();
        let k = m.saturating_sub(1);

        let mut matrix = DMatrix::zeros(m, m);
        let rhs = DVector::from_iterator(m, values.iter().copied());

        for (row, &x) in matrix.row_iter_mut().zip(reference) {
            basis.fill_matrix_row(k, x, row);
        }

        // (-1)^(i+1): -1 at the first reference point, then alternating
        for i in 0..m {
            matrix[(i, m - 1)] = if i % 2 == 0 { -T::one() } else { T::one() };
        }

        let ordered = reference.windows(2).all(|w| w[0] < w[1]);
        Self {
            matrix,
            rhs,
            ordered,
        }
    }

    /// Returns the assembled matrix
    #[must_use]
    pub fn matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    /// Estimates the 2-norm condition number from the singular values of the matrix.
    ///
    /// Returns infinity for a matrix with a zero singular value.
    #[must_use]
    pub fn condition_number(&self) -> T {
        let singular_values = self.matrix.singular_values();
        let sigma_max = singular_values.max();
        let sigma_min = singular_values.min();

        if sigma_min <= T::zero() {
            T::infinity()
        } else {
            sigma_max / sigma_min
        }
    }

    /// Solves the system with LU decomposition (Gaussian elimination with partial pivoting).
    ///
    /// # Errors
    /// Fails if the reference is not strictly ascending, the matrix is singular, its condition
    /// number exceeds `max_condition`, or the solution is not finite.
    pub fn solve(&self, max_condition: T) -> Result<LevelledSolution<T>, SolveFailure<T>> {
        if self.rhs.is_empty() {
            return Err(SolveFailure::Singular);
        } else if !self.ordered {
            return Err(SolveFailure::UnorderedReference);
        }

        let condition = self.condition_number();
        if !condition.is_finite_value() {
            return Err(SolveFailure::Singular);
        } else if condition > max_condition {
            return Err(SolveFailure::IllConditioned {
                condition,
                limit: max_condition,
            });
        }

        let solution = self
            .matrix
            .clone()
            .lu()
            .solve(&self.rhs)
            .ok_or(SolveFailure::Singular)?;

        if solution.iter().any(|v| !v.is_finite_value()) {
            return Err(SolveFailure::NonFinite);
        }

        let mut coefficients: Vec<T> = solution.data.into();
        let levelled_error = coefficients.pop().ok_or(SolveFailure::Singular)?;
        Ok(LevelledSolution {
            coefficients,
            levelled_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_all_close, assert_close, basis::Parity};

    #[test]
    fn test_assembly() {
        let system = LevelledSystem::new(
            MonomialBasis::new(Parity::Full),
            &[-1.0, 0.0, 1.0],
            &[1.0, 0.0, 1.0],
        );

        let expected = DMatrix::from_row_slice(
            3,
            3,
            &[
                1.0, -1.0, -1.0, //
                1.0, 0.0, 1.0, //
                1.0, 1.0, -1.0,
            ],
        );
        assert_eq!(system.matrix(), &expected);
    }

    #[test]
    fn test_assembly_odd() {
        let system = LevelledSystem::new(
            MonomialBasis::new(Parity::Odd),
            &[0.5, 1.0, 2.0],
            &[0.0, 0.0, 0.0],
        );

        let expected = DMatrix::from_row_slice(
            3,
            3,
            &[
                0.5, 0.125, -1.0, //
                1.0, 1.0, 1.0, //
                2.0, 8.0, -1.0,
            ],
        );
        assert_eq!(system.matrix(), &expected);
    }

    #[test]
    fn test_solve_abs() {
        // Best linear approximation of |x| on {-1, 0, 1}: c0 + c1 x with levelled error
        let system = LevelledSystem::new(
            MonomialBasis::new(Parity::Full),
            &[-1.0, 0.0, 1.0],
            &[1.0, 0.0, 1.0],
        );
        let solution = system.solve(DEFAULT_MAX_CONDITION).unwrap();

        assert_all_close!(solution.coefficients, [0.5, 0.0], tol = 1e-15);
        assert_close!(solution.levelled_error, -0.5, tol = 1e-15);
    }

    #[test]
    fn test_duplicate_points() {
        let system = LevelledSystem::new(
            MonomialBasis::new(Parity::Full),
            &[0.0, 0.5, 0.5, 1.0],
            &[0.0, 1.0, 1.0, 2.0],
        );
        assert_eq!(
            system.solve(DEFAULT_MAX_CONDITION),
            Err(SolveFailure::UnorderedReference)
        );
    }

    #[test]
    fn test_descending_points() {
        let system = LevelledSystem::new(
            MonomialBasis::new(Parity::Full),
            &[1.0, 0.5, 0.0],
            &[1.0, 0.25, 0.0],
        );
        let failure = system.solve(DEFAULT_MAX_CONDITION).unwrap_err();
        assert_eq!(failure, SolveFailure::UnorderedReference);
        assert_eq!(failure.to_string(), "reference points are repeated or out of order");
    }

    #[test]
    fn test_ill_conditioned() {
        let system = LevelledSystem::new(
            MonomialBasis::new(Parity::Full),
            &[0.0, 0.5, 1.0],
            &[0.0, 1.0, 2.0],
        );
        let failure = system.solve(1.0).unwrap_err();
        assert!(matches!(failure, SolveFailure::IllConditioned { .. }));
        assert!(failure.to_string().starts_with("condition number"));
    }
}
