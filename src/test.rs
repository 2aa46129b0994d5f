//! Assertions for testing minimax approximations.
//!
//! These macros are used by this crate's own tests and are exported so downstream crates can
//! validate the approximations they generate (for example in a build step that bakes
//! coefficients into fixed-point evaluators).
//!
//! ## Value assertions
//!
//! ### [`crate::assert_close`]
//! Asserts that two floating-point values are approximately equal.
//! - Uses the machine epsilon for the floating-point type as the tolerance, unless `tol = ...` is given.
//! - `assert_eq!` equivalent for floats.
//!
//! ### [`crate::assert_all_close`]
//! Element-wise [`crate::assert_close`] for two slices of the same length.
//!
//! ## Approximation assertions
//!
//! ### [`crate::assert_equioscillates`]
//! Asserts the defining property of a minimax polynomial: the signed error at the
//! reference points alternates in sign, and every magnitude is within a tolerance of the others.
//!
//! ### [`crate::assert_max_error`]
//! Asserts that the achieved worst-case error is finite and below a threshold.
//!
//! ```rust
//! # use minimax::{approximate, assert_max_error, assert_equioscillates};
//! let approx = approximate(f64::exp, 0.0, 1.0, 4, false, false).unwrap();
//! assert_max_error!(approx, 1e-4);
//! assert_equioscillates!(approx, f64::exp, 1e-9);
//! ```

mod assertions;
