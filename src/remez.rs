//! The Remez exchange driver
//!
//! One run moves through `Initializing → Iterating → Converged | Exhausted | Degenerate`
//! (or `Cancelled` when the observer asks to stop):
//! - **Initializing**: the reference set is seeded with `degree + 2` ascending Chebyshev nodes,
//!   and the error mesh is built and the target sampled on it once.
//! - **Iterating**: solve the levelled system on the reference set, sample the error of the
//!   candidate on the mesh, locate the local error maxima, check for convergence, and replace
//!   the reference set with the maxima.
use std::ops::RangeInclusive;

use log::{debug, info, warn};

use crate::{
    basis::{MonomialBasis, Parity},
    error::{Error, Result},
    extrema::local_maxima,
    nodes::{ascending_chebyshev_nodes, error_mesh},
    polynomial::Polynomial,
    sampler::ErrorSampler,
    system::LevelledSystem,
    value::Value,
};

mod config;
mod observer;

pub use config::{
    DegeneratePolicy, RemezConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_MESH_DENSITY, DEFAULT_TOLERANCE,
};
pub use observer::{IterationReport, Observer, Silent};

/// Degree used by [`Remez::new`] until [`Remez::degree`] is called
pub const DEFAULT_DEGREE: usize = 3;

/// How a Remez run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Termination {
    /// The error equioscillates within tolerance (or the target is reproduced within tolerance)
    Converged,

    /// The iteration cap was reached first; the result is the last candidate
    Exhausted,

    /// The number of error extrema did not match the reference size
    Degenerate,

    /// The observer stopped the run
    Cancelled,
}

impl Termination {
    /// Short lowercase name of the terminal state
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Termination::Converged => "converged",
            Termination::Exhausted => "exhausted",
            Termination::Degenerate => "degenerate",
            Termination::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The error of the final candidate over the whole mesh.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorCurve<T: Value = f64> {
    mesh: Vec<T>,
    residuals: Vec<T>,
}
impl<T: Value> ErrorCurve<T> {
    /// Mesh points, ascending
    #[must_use]
    pub fn mesh(&self) -> &[T] {
        &self.mesh
    }

    /// Signed residuals `f(x) - P(x)` at each mesh point
    #[must_use]
    pub fn residuals(&self) -> &[T] {
        &self.residuals
    }

    /// Iterates over `(x, f(x) - P(x))` pairs
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.mesh.iter().copied().zip(self.residuals.iter().copied())
    }
}

/// Result of a Remez run.
///
/// Every terminal state carries a usable candidate; check [`Approximation::termination`]
/// before trusting [`Approximation::achieved_error`] as a minimax error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Approximation<T: Value = f64> {
    degree: usize,
    parity: Parity,
    coefficients: Vec<T>,
    dense_coefficients: Vec<T>,
    achieved_error: T,
    leveled_error: T,
    reference: Vec<T>,
    iterations: usize,
    termination: Termination,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    error_curve: Option<ErrorCurve<T>>,
}

impl<T: Value> Approximation<T> {
    /// Worst absolute error of the candidate on the mesh
    #[must_use]
    pub fn achieved_error(&self) -> T {
        self.achieved_error
    }

    /// Solved coefficients, lowest power present first.
    ///
    /// Always `degree + 1` entries. Under [`Parity::Odd`] index 0 is the linear term,
    /// otherwise it is the constant term.
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Coefficients in ascending power order, with zeros at powers excluded by the parity
    ///
    /// See [`crate::basis::expand`].
    #[must_use]
    pub fn dense_coefficients(&self) -> &[T] {
        &self.dense_coefficients
    }

    /// The approximating polynomial
    ///
    /// # Example
    /// ```
    /// # use minimax::approximate;
    /// let approx = approximate(f64::sin, 0.0, std::f64::consts::PI, 3, true, false).unwrap();
    /// let poly = approx.polynomial();
    /// assert!((poly.y(1.0) - 1f64.sin()).abs() <= 2.0 * approx.achieved_error());
    /// ```
    #[must_use]
    pub fn polynomial(&self) -> Polynomial<'_, T> {
        Polynomial::borrowed(&self.dense_coefficients)
    }

    /// How the run ended
    #[must_use]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns true if the run converged
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Reference set the final candidate was solved on (`degree + 2` ascending points)
    #[must_use]
    pub fn reference(&self) -> &[T] {
        &self.reference
    }

    /// Magnitude of the levelled error `|E|` of the final solve
    #[must_use]
    pub fn leveled_error(&self) -> T {
        self.leveled_error
    }

    /// Number of iterations run
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Mesh and signed residuals of the final candidate
    ///
    /// Only kept when [`RemezConfig::keep_error_curve`] is set.
    #[must_use]
    pub fn error_curve(&self) -> Option<&ErrorCurve<T>> {
        self.error_curve.as_ref()
    }

    /// Number of free coefficients minus one, as requested
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Degree of the dense polynomial
    #[must_use]
    pub fn effective_degree(&self) -> usize {
        self.parity.effective_degree(self.degree)
    }

    /// Parity restriction the approximation was computed with
    #[must_use]
    pub fn parity(&self) -> Parity {
        self.parity
    }
}

/// Builder and driver for a Remez run.
///
/// `degree` counts free coefficients: a run solves for `degree + 1` coefficients, on powers
/// `0..=degree` by default, `1, 3, .., 2·degree + 1` with [`Remez::odd`], or `0, 2, .., 2·degree`
/// with [`Remez::even`].
///
/// # Example
/// ```
/// # use minimax::{Remez, Termination, assert_max_error};
/// let approx = Remez::new(f64::sin, 0.0..=std::f64::consts::PI)
///     .degree(3)
///     .odd()
///     .tolerance(1e-10)
///     .run()
///     .unwrap();
///
/// assert_eq!(approx.termination(), Termination::Converged);
/// assert_eq!(approx.coefficients().len(), 4);
/// assert_max_error!(approx, 1e-3);
/// ```
pub struct Remez<T: Value, F, O = Silent> {
    function: F,
    a: T,
    b: T,
    degree: usize,
    odd: bool,
    even: bool,
    config: RemezConfig<T>,
    observer: O,
}

impl<T: Value, F: Fn(T) -> T> Remez<T, F, Silent> {
    /// Creates a run approximating `function` over the closed interval `range`.
    pub fn new(function: F, range: RangeInclusive<T>) -> Self {
        let (a, b) = range.into_inner();
        Self {
            function,
            a,
            b,
            degree: DEFAULT_DEGREE,
            odd: false,
            even: false,
            config: RemezConfig::default(),
            observer: Silent,
        }
    }
}

impl<T: Value, F: Fn(T) -> T, O: Observer<T>> Remez<T, F, O> {
    /// Sets the degree (number of free coefficients minus one)
    #[must_use]
    pub fn degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    /// Sets the parity restriction, replacing any earlier [`Remez::odd`] or [`Remez::even`]
    #[must_use]
    pub fn parity(mut self, parity: Parity) -> Self {
        self.odd = parity == Parity::Odd;
        self.even = parity == Parity::Even;
        self
    }

    /// Restricts the polynomial to odd powers of `x`
    #[must_use]
    pub fn odd(mut self) -> Self {
        self.odd = true;
        self
    }

    /// Restricts the polynomial to even powers of `x`
    #[must_use]
    pub fn even(mut self) -> Self {
        self.even = true;
        self
    }

    /// Sets the convergence tolerance
    #[must_use]
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap
    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Replaces the whole configuration
    #[must_use]
    pub fn config(mut self, config: RemezConfig<T>) -> Self {
        self.config = config;
        self
    }

    /// Attaches an observer, called after every iteration
    pub fn observer<O2: Observer<T>>(self, observer: O2) -> Remez<T, F, O2> {
        Remez {
            function: self.function,
            a: self.a,
            b: self.b,
            degree: self.degree,
            odd: self.odd,
            even: self.even,
            config: self.config,
            observer,
        }
    }

    fn validate(&self) -> Result<Parity> {
        let parity = Parity::from_flags(self.odd, self.even)?;

        if !self.a.is_finite_value() || !self.b.is_finite_value() || self.a >= self.b {
            return Err(Error::InvalidInterval(
                self.a.to_string(),
                self.b.to_string(),
            ));
        }

        self.config.validate()?;
        Ok(parity)
    }

    /// Runs the exchange until it converges, exhausts its iterations, degenerates or is cancelled.
    ///
    /// # Errors
    /// - [`Error::InvalidInterval`], [`Error::ConflictingParity`] or [`Error::InvalidSetting`]
    ///   before any iteration runs.
    /// - [`Error::SingularSystem`] if a levelled system cannot be solved.
    /// - [`Error::DegenerateExtrema`] under [`DegeneratePolicy::Abort`].
    pub fn run(mut self) -> Result<Approximation<T>> {
        let parity = self.validate()?;
        let RemezConfig {
            tolerance,
            max_iterations,
            mesh_density,
            max_condition,
            degenerate,
            keep_error_curve,
        } = self.config.clone();

        let (a, b) = (self.a, self.b);
        let m = self.degree + 2;
        let basis = MonomialBasis::new(parity);
        let function = &self.function;

        // An odd node count puts a mesh point at the centre of the interval, where symmetric
        // targets peak and an even count would leave two tied neighbours
        let points = mesh_density.saturating_mul(m) | 1;
        let sampler = ErrorSampler::new(function, error_mesh(points, a, b));
        let mut reference = ascending_chebyshev_nodes(m, a, b);
        debug!(
            "remez: degree {} ({}) on [{a}, {b}], {} mesh points",
            self.degree,
            parity.label(),
            sampler.len()
        );

        let mut iteration = 0;
        loop {
            iteration += 1;

            let values: Vec<T> = reference.iter().map(|&x| function(x)).collect();
            let solution = LevelledSystem::new(basis, &reference, &values)
                .solve(max_condition)
                .map_err(|e| Error::SingularSystem {
                    iteration,
                    reason: e.to_string(),
                })?;

            let polynomial = Polynomial::from_restricted(&solution.coefficients, parity)?;
            let samples = sampler.sample(&polynomial);
            let max_error = samples.max_abs();
            let extrema = local_maxima(samples.absolute());
            let leveled_error = Value::abs(solution.levelled_error);

            debug!(
                "remez: iteration {iteration}: |E| = {leveled_error:e}, max error = {max_error:e}, {} extrema",
                extrema.len()
            );

            let flow = self.observer.on_iteration(&IterationReport {
                iteration,
                reference: &reference,
                coefficients: &solution.coefficients,
                leveled_error,
                max_error,
                extrema: extrema.len(),
            });

            let converged = has_converged(samples.absolute(), &extrema, m, max_error, tolerance);

            let termination = if converged {
                Termination::Converged
            } else if flow.is_break() {
                Termination::Cancelled
            } else if extrema.len() != m {
                if degenerate == DegeneratePolicy::Abort {
                    return Err(Error::DegenerateExtrema {
                        iteration,
                        expected: m,
                        found: extrema.len(),
                    });
                }
                Termination::Degenerate
            } else if iteration >= max_iterations {
                Termination::Exhausted
            } else {
                reference = extrema.iter().map(|&i| sampler.mesh()[i]).collect();
                continue;
            };

            match termination {
                Termination::Converged => {
                    info!("remez: converged after {iteration} iterations, max error {max_error:e}");
                }
                Termination::Exhausted => {
                    warn!("remez: no convergence after {iteration} iterations, max error {max_error:e}");
                }
                Termination::Degenerate => warn!(
                    "remez: expected {m} extrema at iteration {iteration}, found {}; stopping",
                    extrema.len()
                ),
                Termination::Cancelled => warn!("remez: cancelled at iteration {iteration}"),
            }

            let error_curve = keep_error_curve.then(|| ErrorCurve {
                mesh: sampler.mesh().to_vec(),
                residuals: samples.into_signed(),
            });

            return Ok(Approximation {
                degree: self.degree,
                parity,
                dense_coefficients: polynomial.coefficients().to_vec(),
                coefficients: solution.coefficients,
                achieved_error: max_error,
                leveled_error,
                reference,
                iterations: iteration,
                termination,
                error_curve,
            });
        }
    }
}

/// Converged when the target is reproduced within `tolerance`, or when exactly `m` extrema
/// were located and they are levelled
fn has_converged<T: Value>(
    errors: &[T],
    extrema: &[usize],
    m: usize,
    max_error: T,
    tolerance: T,
) -> bool {
    max_error <= tolerance || (extrema.len() == m && is_leveled(errors, extrema, tolerance))
}

/// True if every located extremum is within `tolerance` of the first one
fn is_leveled<T: Value>(errors: &[T], extrema: &[usize], tolerance: T) -> bool {
    let Some(&first) = extrema.first() else {
        return false;
    };

    let first = errors[first];
    extrema
        .iter()
        .all(|&i| Value::abs_sub(errors[i], first) <= tolerance)
}

/// Computes a minimax approximation with the default configuration.
///
/// Shorthand for [`Remez`] taking the parity as a pair of flags.
///
/// # Errors
/// Returns [`Error::ConflictingParity`] if both `odd` and `even` are set, and otherwise
/// fails as [`Remez::run`] does.
///
/// # Example
/// ```
/// # use minimax::approximate;
/// let approx = approximate(|x: f64| x, -1.0, 1.0, 1, false, false).unwrap();
/// assert!(approx.achieved_error() < 1e-12);
/// assert!((approx.coefficients()[1] - 1.0).abs() < 1e-12);
/// ```
pub fn approximate<T: Value, F: Fn(T) -> T>(
    function: F,
    a: T,
    b: T,
    degree: usize,
    odd: bool,
    even: bool,
) -> Result<Approximation<T>> {
    let mut remez = Remez::new(function, a..=b).degree(degree);
    if odd {
        remez = remez.odd();
    }
    if even {
        remez = remez.even();
    }
    remez.run()
}
