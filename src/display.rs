//! Utilities for displaying and formatting polynomials
//!
//! This module converts dense monomial coefficients into human-readable strings,
//! handling coefficient formatting and superscript exponents.
//!
//! # Key Concepts
//! - **[`Term`]**: Represents a single polynomial term with a sign and body.
//! - **[`Sign`]**: Tracks whether a term is positive or negative.
//! - [`format_polynomial`] renders a full polynomial as `"y(x) = ..."`.
//!
//! # Helpers
//! - [`format_coefficient`]: Formats a numeric coefficient, skipping zeros.
//! - [`format_variable`]: Formats `x` with a unicode superscript exponent.
#![allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]

use crate::value::Value;

pub mod unicode;

/// Default precision for formatting polynomials with `{}`
pub const DEFAULT_PRECISION: usize = 2;

/// Default range in which scientific notation is not used
#[must_use]
pub fn default_fixed_range<T: Value>() -> Option<std::ops::Range<T>> {
    const RANGE: std::ops::Range<f64> = 1e-3..1e3;
    let s = T::try_cast(RANGE.start).ok()?;
    let e = T::try_cast(RANGE.end).ok()?;
    Some(s..e)
}

/// Represents the sign of a polynomial term.
///
/// Used when formatting polynomial expressions to determine how a term
/// should be connected to the rest of the polynomial (e.g., with `+` or `-`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Positive sign (`+` when displayed).
    Positive,

    /// Negative sign (`-` when displayed).
    Negative,
}

impl Sign {
    /// Determines the sign from a numeric coefficient.
    ///
    /// # Example
    /// ```
    /// # use minimax::display::Sign;
    /// assert_eq!(Sign::from_coef(3.0), Sign::Positive);
    /// assert_eq!(Sign::from_coef(-2.0), Sign::Negative);
    /// ```
    pub fn from_coef<T: Value>(coef: T) -> Self {
        if coef < T::zero() {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Returns the character representation of the sign.
    #[must_use]
    pub fn char(&self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

/// Represents a single term of a polynomial for display purposes.
///
/// A `Term` combines the **sign** and the **formatted body** of a polynomial
/// component (e.g., `"2x²"`, `"3.14"`, `"x"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The sign of the term (positive or negative).
    pub sign: Sign,

    /// The body of the term (e.g., `"2x²"`, `"3.14"`, `"x"`).
    pub body: String,
}

impl Term {
    /// Creates a new polynomial term with the given sign and body.
    #[must_use]
    pub fn new(sign: Sign, body: String) -> Self {
        Self { sign, body }
    }

    /// Formats the monomial term `coef·x^degree`.
    ///
    /// Returns `None` if the coefficient is effectively zero.
    pub fn monomial<T: Value>(degree: i32, coef: T, precision: usize) -> Option<Self> {
        let sign = Sign::from_coef(coef);

        let base = format_variable("x", degree);
        let coef = format_coefficient(coef, degree, precision)?;

        Some(Self::new(sign, format!("{coef}{base}")))
    }
}

/// Formats a numeric coefficient for display in a polynomial term.
///
/// - Returns `None` if the coefficient is zero or effectively zero (≤ epsilon).
/// - Returns an empty string for a unit coefficient on a non-constant term.
/// - Formats as a decimal if the absolute value is between `1e-3` and `1e3`.
/// - Formats in scientific notation otherwise.
///
/// # Example
/// ```
/// # use minimax::display::format_coefficient;
/// assert_eq!(format_coefficient(0.0, 1, 2), None);
/// assert_eq!(format_coefficient(2.5, 1, 2), Some("2.50".to_string()));
/// assert_eq!(format_coefficient(1e5, 1, 2), Some("1.00e5".to_string()));
/// ```
pub fn format_coefficient<T: Value>(coef: T, degree: i32, precision: usize) -> Option<String> {
    let abs = Value::abs(coef);

    if coef.is_zero() || abs <= T::epsilon() {
        return None;
    }

    if Value::abs_sub(abs, T::one()) <= T::epsilon() && degree != 0 {
        return Some(String::new());
    }

    let sci_cutoff = default_fixed_range();
    Some(unicode::float(abs, sci_cutoff, precision))
}

/// Formats the variable part of a polynomial term for display purposes.
///
/// # Behavior
/// - If `exp == 0`, returns an empty string (`""`).
/// - If `exp == 1`, returns the base string unchanged.
/// - Otherwise, appends the Unicode superscript version of `exp` to `base`.
///
/// # Examples
/// ```
/// # use minimax::display::format_variable;
/// assert_eq!(format_variable("x", 0), "");
/// assert_eq!(format_variable("x", 1), "x");
/// assert_eq!(format_variable("x", 2), "x²");
/// ```
#[must_use]
pub fn format_variable(base: &str, exp: i32) -> String {
    match exp {
        0 => String::new(),
        1 => base.to_string(),
        _ => {
            let sup = unicode::superscript(&exp.to_string());
            format!("{base}{sup}")
        }
    }
}

/// Writes the full polynomial expression into the provided buffer.
///
/// Terms are written highest power first, prefixed with `"y(x) = "`.
///
/// # Coefficients
/// - `coefficients[i]` is the coefficient of `x^i`.
/// - Zero coefficients are skipped automatically, so parity-padded polynomials
///   only show the powers they use.
///
/// # Errors
/// Returns an error if writing to `buffer` fails.
pub fn format_polynomial<T: Value, B: std::fmt::Write>(
    buffer: &mut B,
    coefficients: &[T],
    precision: usize,
) -> std::fmt::Result {
    let mut terms = coefficients
        .iter()
        .enumerate()
        .rev()
        .filter_map(|(power, &coef)| Term::monomial(power as i32, coef, precision));

    write!(buffer, "y(x) = ")?;

    // Extract the first term to avoid leading '+'
    let Some(term_n) = terms.next() else {
        return write!(buffer, "0");
    };
    if term_n.sign == Sign::Negative {
        write!(buffer, "{}", term_n.sign.char())?;
    }
    write!(buffer, "{}", term_n.body)?;

    for term in terms {
        write!(buffer, " {} {}", term.sign.char(), term.body)?;
    }

    Ok(())
}
