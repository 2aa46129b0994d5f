//! Sampling of the approximation error on a fixed mesh
//!
//! The target function is evaluated once when the sampler is built. Each Remez iteration then
//! only evaluates the candidate polynomial, so a run costs `mesh.len()` calls of the target in
//! total rather than per iteration.
use crate::{polynomial::Polynomial, value::Value};

/// Error samples of a candidate polynomial, aligned index-for-index with the mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSamples<T: Value> {
    signed: Vec<T>,
    absolute: Vec<T>,
}
impl<T: Value> ErrorSamples<T> {
    /// Signed errors `f(x) - P(x)`
    #[must_use]
    pub fn signed(&self) -> &[T] {
        &self.signed
    }

    /// Absolute errors `|f(x) - P(x)|`
    #[must_use]
    pub fn absolute(&self) -> &[T] {
        &self.absolute
    }

    /// Largest absolute error on the mesh
    ///
    /// NaN samples propagate, so a target that is undefined somewhere on the mesh
    /// yields a NaN worst error rather than silently ignoring those points.
    #[must_use]
    pub fn max_abs(&self) -> T {
        self.absolute.iter().fold(T::zero(), |acc, &e| {
            if e.is_nan() || acc.is_nan() {
                T::nan()
            } else {
                nalgebra::RealField::max(acc, e)
            }
        })
    }

    /// Consumes the samples, returning the signed errors
    #[must_use]
    pub fn into_signed(self) -> Vec<T> {
        self.signed
    }
}

/// Evaluates `f(x) - P(x)` over a fixed mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSampler<T: Value> {
    mesh: Vec<T>,
    values: Vec<T>,
}

impl<T: Value> ErrorSampler<T> {
    /// Minimum mesh size before sampling is split across threads
    #[cfg(feature = "parallel")]
    pub const MIN_POINTS_TO_PARALLEL: usize = 20_000;

    /// Creates a sampler, evaluating the target function once on every mesh point.
    pub fn new<F: Fn(T) -> T>(function: F, mesh: Vec<T>) -> Self {
        let values = mesh.iter().map(|&x| function(x)).collect();
        Self { mesh, values }
    }

    /// The mesh points, ascending
    #[must_use]
    pub fn mesh(&self) -> &[T] {
        &self.mesh
    }

    /// The target function's value at each mesh point
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of mesh points
    #[must_use]
    pub fn len(&self) -> usize {
        self.mesh.len()
    }

    /// Returns true if the mesh is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Samples the error of a polynomial on every mesh point.
    ///
    /// # Warning
    /// If the `parallel` feature is enabled, and the mesh has at least
    /// [`Self::MIN_POINTS_TO_PARALLEL`] points, the mesh is sampled across the rayon thread pool.
    /// Each sample is computed independently, so the result is identical to the sequential path.
    pub fn sample(&self, polynomial: &Polynomial<'_, T>) -> ErrorSamples<T> {
        let signed = self.signed_errors(polynomial);
        let absolute = signed.iter().map(|&e| Value::abs(e)).collect();
        ErrorSamples { signed, absolute }
    }

    fn signed_errors(&self, polynomial: &Polynomial<'_, T>) -> Vec<T> {
        #[cfg(feature = "parallel")]
        if self.mesh.len() >= Self::MIN_POINTS_TO_PARALLEL {
            use rayon::prelude::*;
            return self
                .mesh
                .par_iter()
                .zip(self.values.par_iter())
                .map(|(&x, &y)| y - polynomial.y(x))
                .collect();
        }

        self.mesh
            .iter()
            .zip(&self.values)
            .map(|(&x, &y)| y - polynomial.y(x))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_all_close, assert_close, nodes::error_mesh};

    #[test]
    fn test_sample() {
        let sampler = ErrorSampler::new(|x: f64| x * x, vec![-1.0, 0.0, 0.5, 2.0]);
        let poly = Polynomial::new(vec![0.0, 1.0]).unwrap();

        let samples = sampler.sample(&poly);
        assert_all_close!(samples.signed(), [2.0, 0.0, -0.25, 2.0]);
        assert_all_close!(samples.absolute(), [2.0, 0.0, 0.25, 2.0]);
        assert_close!(samples.max_abs(), 2.0);
    }

    #[test]
    fn test_values_cached() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let sampler = ErrorSampler::new(
            |x: f64| {
                calls.set(calls.get() + 1);
                x.exp()
            },
            error_mesh(100, 0.0, 1.0),
        );
        let poly = Polynomial::new(vec![1.0, 1.0]).unwrap();
        for _ in 0..3 {
            let _ = sampler.sample(&poly);
        }

        assert_eq!(calls.get(), sampler.len());
        assert_eq!(sampler.values().len(), 102);
    }

    #[test]
    fn test_nan_propagates() {
        let sampler = ErrorSampler::new(f64::ln, vec![-1.0, 1.0, 2.0]);
        let poly = Polynomial::new(vec![0.0]).unwrap();
        assert!(sampler.sample(&poly).max_abs().is_nan());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let mesh = error_mesh(ErrorSampler::<f64>::MIN_POINTS_TO_PARALLEL, -1.0, 1.0);
        let sampler = ErrorSampler::new(f64::sin, mesh);
        let poly = Polynomial::new(vec![0.0, 1.0, 0.0, -1.0 / 6.0]).unwrap();

        let parallel = sampler.sample(&poly);
        let sequential: Vec<f64> = sampler
            .mesh()
            .iter()
            .zip(sampler.values())
            .map(|(&x, &y)| y - poly.y(x))
            .collect();
        assert_eq!(parallel.signed(), &sequential[..]);
    }
}
