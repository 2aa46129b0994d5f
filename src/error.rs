//! Error types for minimax approximation
//!
//! This module defines the failure modes of a Remez run, along with a convenient `Result` alias.
//!
//! Running out of iterations is **not** an error: it is reported through
//! [`crate::Termination::Exhausted`] on an otherwise usable result.

/// Errors that can occur while computing a minimax approximation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The interval is empty, reversed, or has a non-finite bound.
    ///
    /// Bounds are carried as display strings so the error does not depend on the numeric type.
    #[error("Invalid interval [{0}, {1}]; the lower bound must be finite and strictly less than the upper bound")]
    InvalidInterval(String, String),

    /// Both `odd` and `even` restrictions were requested at once.
    #[error("A polynomial cannot be restricted to both odd and even powers")]
    ConflictingParity,

    /// A configuration value is outside of its valid range.
    #[error("Invalid setting `{name}`: {reason}")]
    InvalidSetting {
        /// Name of the offending setting
        name: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// The levelled linear system could not be solved.
    ///
    /// Usually the reference set has collapsed onto (nearly) duplicate points,
    /// or the requested degree is too high for the interval.
    #[error("Levelled system is singular or ill-conditioned at iteration {iteration}: {reason}")]
    SingularSystem {
        /// Iteration during which the solve failed (1-based)
        iteration: usize,
        /// Description of the failure
        reason: String,
    },

    /// The number of error extrema located on the mesh does not match the reference size.
    ///
    /// Only returned under [`crate::DegeneratePolicy::Abort`].
    #[error("Expected {expected} error extrema at iteration {iteration}, found {found}")]
    DegenerateExtrema {
        /// Iteration during which the extrema were located (1-based)
        iteration: usize,
        /// Reference set size (`degree + 2`)
        expected: usize,
        /// Number of extrema actually located
        found: usize,
    },

    /// A numeric value could not be cast to the target type.
    #[error("Failed to cast value to target type")]
    CastFailed,
}

impl Error {
    /// Returns true if this error was raised by input validation, before any iteration ran.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidInterval(..) | Error::ConflictingParity | Error::InvalidSetting { .. }
        )
    }
}

/// Result type for minimax approximation
pub type Result<T> = std::result::Result<T, Error>;
