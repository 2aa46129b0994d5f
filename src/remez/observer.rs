use std::ops::ControlFlow;

use crate::value::Value;

/// Progress of a Remez run after one solve-sample-select step.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport<'a, T: Value = f64> {
    /// Iteration index, starting at 1
    pub iteration: usize,

    /// Reference set the levelled system was solved on
    pub reference: &'a [T],

    /// Restricted coefficients of the candidate, lowest power first
    pub coefficients: &'a [T],

    /// Magnitude of the levelled error `|E|`
    pub leveled_error: T,

    /// Largest absolute error on the mesh
    pub max_error: T,

    /// Number of local error maxima located on the mesh
    pub extrema: usize,
}

/// Receives an [`IterationReport`] after every iteration of a Remez run.
///
/// Returning [`ControlFlow::Break`] stops the run at the end of the current iteration, which then
/// ends with [`crate::Termination::Cancelled`] (unless that iteration already converged).
///
/// Any `FnMut(&IterationReport<T>) -> ControlFlow<()>` closure is an observer:
/// ```
/// # use std::ops::ControlFlow;
/// # use minimax::{IterationReport, Remez, Termination};
/// let approx = Remez::new(f64::exp, 0.0..=1.0)
///     .degree(4)
///     .observer(|report: &IterationReport<'_, f64>| -> ControlFlow<()> {
///         println!("{}: |E| = {:e}", report.iteration, report.leveled_error);
///         ControlFlow::Continue(())
///     })
///     .run()
///     .unwrap();
/// assert_eq!(approx.termination(), Termination::Converged);
/// ```
pub trait Observer<T: Value> {
    /// Called once per iteration
    fn on_iteration(&mut self, report: &IterationReport<'_, T>) -> ControlFlow<()> {
        let _ = report;
        ControlFlow::Continue(())
    }
}

/// Observer that ignores every report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silent;
impl<T: Value> Observer<T> for Silent {}

impl<T: Value, F> Observer<T> for F
where
    F: FnMut(&IterationReport<'_, T>) -> ControlFlow<()>,
{
    fn on_iteration(&mut self, report: &IterationReport<'_, T>) -> ControlFlow<()> {
        self(report)
    }
}
