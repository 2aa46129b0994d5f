use crate::{
    error::{Error, Result},
    system::DEFAULT_MAX_CONDITION,
    value::Value,
};

/// Default convergence tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-13;

/// Default iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Default number of mesh points per reference point
pub const DEFAULT_MESH_DENSITY: usize = 100;

/// What to do when the number of located error extrema does not match the reference size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DegeneratePolicy {
    /// Stop and return the current candidate with [`crate::Termination::Degenerate`]
    #[default]
    Stop,

    /// Fail with [`Error::DegenerateExtrema`]
    Abort,
}

/// Settings for a Remez run.
///
/// Every field has a sensible default; use the builder-style setters to change them:
/// ```
/// # use minimax::{RemezConfig, DegeneratePolicy};
/// let config = RemezConfig::<f64>::default()
///     .tolerance(1e-10)
///     .max_iterations(20)
///     .degenerate(DegeneratePolicy::Abort);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemezConfig<T: Value = f64> {
    /// Absolute tolerance on the spread of the error magnitudes at the located extrema
    pub tolerance: T,

    /// Iteration cap. Reaching it ends the run with [`crate::Termination::Exhausted`]
    pub max_iterations: usize,

    /// Mesh points per reference point; the mesh has `mesh_density * (degree + 2)` interior points,
    /// rounded up to an odd count
    pub mesh_density: usize,

    /// Largest condition number accepted from the levelled system
    pub max_condition: T,

    /// Handling of a mismatched extremum count
    pub degenerate: DegeneratePolicy,

    /// Keep the mesh and signed residuals of the final candidate on the result
    pub keep_error_curve: bool,
}

impl<T: Value> Default for RemezConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: nalgebra::convert(DEFAULT_TOLERANCE),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            mesh_density: DEFAULT_MESH_DENSITY,
            max_condition: nalgebra::convert(DEFAULT_MAX_CONDITION),
            degenerate: DegeneratePolicy::default(),
            keep_error_curve: false,
        }
    }
}

impl<T: Value> RemezConfig<T> {
    /// Sets the convergence tolerance
    #[must_use]
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap
    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the number of mesh points per reference point
    #[must_use]
    pub fn mesh_density(mut self, mesh_density: usize) -> Self {
        self.mesh_density = mesh_density;
        self
    }

    /// Sets the condition number limit for the levelled system
    #[must_use]
    pub fn max_condition(mut self, max_condition: T) -> Self {
        self.max_condition = max_condition;
        self
    }

    /// Sets the degenerate-extrema policy
    #[must_use]
    pub fn degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Keeps the final error curve on the result
    #[must_use]
    pub fn keep_error_curve(mut self, keep: bool) -> Self {
        self.keep_error_curve = keep;
        self
    }

    /// Checks every setting is within its valid range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSetting`] naming the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite_value() || self.tolerance <= T::zero() {
            return Err(Error::InvalidSetting {
                name: "tolerance",
                reason: "must be finite and greater than zero",
            });
        }

        if self.max_iterations == 0 {
            return Err(Error::InvalidSetting {
                name: "max_iterations",
                reason: "at least one iteration is required",
            });
        }

        if self.mesh_density == 0 {
            return Err(Error::InvalidSetting {
                name: "mesh_density",
                reason: "must be at least one point per reference point",
            });
        }

        if self.max_condition.is_nan() || self.max_condition < T::one() {
            return Err(Error::InvalidSetting {
                name: "max_condition",
                reason: "must be at least one",
            });
        }

        Ok(())
    }
}
