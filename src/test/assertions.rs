/// Asserts that two floating-point values are approximately equal.
///
/// This is useful for comparing computed values where exact equality is not expected due to rounding errors.
/// - Uses the machine epsilon for the floating-point type as the tolerance by default.
/// - Pass `tol = <value>` for an explicit absolute tolerance.
/// - `assert_eq!` equivalent for floats.
///
/// # Panics
/// Panics if the absolute difference `|a - b|` exceeds the tolerance.
///
/// # Examples
/// ```
/// # use minimax::assert_close;
/// assert_close!(1.0 + 1e-16, 1.0, "Nearly equal");
/// assert_close!(0.5, 0.5001, tol = 1e-3);
/// ```
#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr, tol = $tol:expr $(, $($msg:tt)+)?) => { #[allow(clippy::float_cmp)] {
        #[allow(unused_mut, unused_assignments)] let mut msg = "Values not close".to_string();
        $( msg = format!($($msg)+); )?

        let (a, b, tol) = ($a, $b, $tol);
        assert!(
            a == b || $crate::value::Value::abs_sub(a, b) <= tol,
            "{msg}: {a} != {b} (tol={tol})"
        );
    }};

    ($a:expr, $b:expr $(, $($msg:tt)+)?) => {{
        fn epsilon<T: $crate::value::Value>(_: T) -> T {
            T::epsilon()
        }

        let a = $a;
        $crate::assert_close!(a, $b, tol = epsilon(a) $(, $($msg)+)?);
    }};
}

/// Asserts that two slices of floating-point values are approximately equal element-wise.
///
/// - Element-wise [`crate::assert_close`]; accepts the same `tol = <value>` option.
///
/// # Panics
/// - If the lengths differ.
/// - If any pair of elements differ by more than the tolerance.
///
/// # Examples
/// ```
/// # use minimax::assert_all_close;
/// let a = vec![1.0, 2.0, 3.0];
/// let b = vec![1.0 + 1e-16, 2.0, 3.0];
///
/// assert_all_close!(a, b);
/// assert_all_close!(a, [1.001, 2.0, 3.0], tol = 1e-2);
/// ```
#[macro_export]
macro_rules! assert_all_close {
    ($src:expr, $dst:expr, tol = $tol:expr) => {{
        let (src, dst) = (&$src, &$dst);
        assert_eq!(src.len(), dst.len(), "{} elements - length mismatch", src.len());

        for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
            $crate::assert_close!(*s, *d, tol = $tol, "src[{i}]");
        }
    }};

    ($src:expr, $dst:expr) => {{
        let (src, dst) = (&$src, &$dst);
        assert_eq!(src.len(), dst.len(), "{} elements - length mismatch", src.len());

        for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
            $crate::assert_close!(*s, *d, "src[{i}]");
        }
    }};
}

/// Asserts that an approximation equioscillates against its target function.
///
/// Evaluates the signed error `f(x) - P(x)` at every point of the final reference set, then checks:
/// - the reference set has `degree + 2` points,
/// - consecutive errors have opposite signs,
/// - every error magnitude is within `tol` of the first one.
///
/// # Parameters
/// - `$approx`: The [`crate::Approximation`] under test.
/// - `$function`: The target function it was computed for.
/// - `$tol`: Absolute tolerance on the spread of error magnitudes.
///
/// # Panics
/// Panics if any of the checks fail.
///
/// # Example
/// ```
/// # use minimax::{approximate, assert_equioscillates};
/// let approx = approximate(f64::cos, 0.0, 1.0, 2, false, true).unwrap();
/// assert_equioscillates!(approx, f64::cos, 1e-9);
/// ```
#[macro_export]
macro_rules! assert_equioscillates {
    ($approx:expr, $function:expr, $tol:expr $(, $($msg:tt)+)?) => {{
        let approx = &$approx;
        let function = $function;
        let tol = $tol;

        #[allow(unused_mut, unused_assignments)] let mut msg = "Approximation does not equioscillate".to_string();
        $( msg = format!("{msg}: {}", format!($($msg)+)); )?

        let poly = approx.polynomial();
        let reference = approx.reference();
        assert_eq!(
            reference.len(),
            approx.degree() + 2,
            "{msg} - reference set has the wrong size"
        );

        let errors: Vec<_> = reference.iter().map(|&x| function(x) - poly.y(x)).collect();
        for (i, pair) in errors.windows(2).enumerate() {
            let (e0, e1) = (pair[0], pair[1]);
            assert!(
                $crate::value::Value::f_signum(&e0) != $crate::value::Value::f_signum(&e1),
                "{msg} - errors at reference[{i}] and reference[{}] share a sign ({e0:e}, {e1:e})",
                i + 1
            );
        }

        let first = $crate::value::Value::abs(errors[0]);
        for (i, &e) in errors.iter().enumerate() {
            let spread = $crate::value::Value::abs_sub($crate::value::Value::abs(e), first);
            assert!(
                spread <= tol,
                "{msg} - |error| at reference[{i}] differs from reference[0] by {spread:e} > {tol:e}"
            );
        }
    }};
}

/// Asserts that the achieved error of an approximation is finite and no larger than `max`.
///
/// # Panics
/// Panics if the error is not finite or exceeds `max`.
///
/// # Example
/// ```rust
/// # use minimax::{approximate, assert_max_error};
/// let approx = approximate(f64::sin, 0.0, 1.0, 3, false, false).unwrap();
/// assert_max_error!(approx, 1e-3);
/// ```
#[macro_export]
macro_rules! assert_max_error {
    ($approx:expr, $max:expr $(, $($msg:tt)+)?) => {{
        let approx = &$approx;
        let max = $max;
        let error = approx.achieved_error();

        #[allow(unused_mut, unused_assignments)] let mut msg = format!(
            "Achieved error above threshold - error={error:e}, max={max:e}, termination={:?}",
            approx.termination()
        );
        $( msg = format!("{msg}: {}", format!($($msg)+)); )?

        assert!($crate::value::Value::is_finite_value(&error), "{msg}");
        assert!(error <= max, "{msg}");
    }};
}
