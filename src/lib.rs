//! # Minimax
//! ## Polynomials that are wrong by as little as possible
//!
//! A Taylor series is exact at one point and drifts further from the truth the further you get from it.
//! A least-squares fit is good on average but says nothing about its worst case. When you need to evaluate
//! `sin`, `exp` or `atan` with a handful of multiply-adds (a DSP kernel, a shader, a fixed-point
//! microcontroller) you want the polynomial whose **largest** error over an interval is as small as it can be.
//!
//! This library computes those polynomials with the Remez exchange algorithm:
//! - Pick a degree, an interval, and optionally restrict the polynomial to odd or even powers of `x`
//! - Get back the coefficients, the worst-case error, and how the run ended
//! - Write easy to understand tests to confirm the result is actually minimax
//!
//! The simplest use-case is to approximate a function and read off the coefficients:
//! ```rust
//! use minimax::{approximate, assert_max_error};
//!
//! // sin(x) on [0, π] with odd powers x, x³, x⁵, x⁷
//! let approx = approximate(f64::sin, 0.0, std::f64::consts::PI, 3, true, false).unwrap();
//! assert!(approx.is_converged());
//! assert_max_error!(approx, 1e-3);
//!
//! println!("{:.6}", approx.polynomial());
//! println!("max error = {:e}", approx.achieved_error());
//! ```
//!
//! # Core Concepts
//! - The **degree** counts free coefficients: a run always solves for `degree + 1` of them.
//!     - With [`basis::Parity::Full`] they are the powers `0..=degree`.
//!     - With [`basis::Parity::Odd`] they are `x, x³, .., x^(2·degree+1)`. Useful for odd functions like `sin` or `atan`.
//!     - With [`basis::Parity::Even`] they are `1, x², .., x^(2·degree)`. Useful for even functions like `cos`.
//! - The **reference set** is `degree + 2` points where the error is forced to alternate in sign with equal magnitude.
//!     - Each iteration solves for that polynomial, then moves the reference set to the peaks of the actual error.
//!     - When the peaks are all the same height, the polynomial is minimax and the run has [`Termination::Converged`].
//! - A run that does not converge is not an error: [`Approximation::termination`] tells you whether the
//!   iteration cap was reached, the error curve degenerated, or an [`Observer`] cancelled the run.
//!
//! For more control use the [`Remez`] builder and a [`RemezConfig`]:
//! ```rust
//! # use minimax::{Remez, RemezConfig, DegeneratePolicy};
//! let approx = Remez::new(f64::exp, 0.0..=1.0)
//!     .degree(5)
//!     .config(RemezConfig::default().mesh_density(200).degenerate(DegeneratePolicy::Abort))
//!     .run()
//!     .unwrap();
//! assert_eq!(approx.dense_coefficients().len(), 6);
//! ```
//!
//! # Implementation Details
//!
//! This crate makes use of the `nalgebra` library for linear algebra operations, and `log` for
//! progress messages. With the `parallel` feature (on by default), sampling the error of large meshes
//! is spread over `rayon`'s thread pool.
//!
//! # Testing utilities
//!
//! This crate includes a set of assertion macros to validate approximations. See [`test`].
//!
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::needless_range_loop)] // The worst clippy lint
#![allow(clippy::cast_precision_loss)] // I don't care about this one
#![allow(clippy::similar_names)] //       Clippy does not get to decide what names are similar
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod test;

pub mod basis;
pub mod display;
pub mod error;
pub mod extrema;
pub mod nodes;
pub mod sampler;
pub mod system;
pub mod value;

mod polynomial;
mod remez;

pub use polynomial::Polynomial;
pub use remez::*;

pub use nalgebra;
