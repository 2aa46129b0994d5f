//! Selection of local error maxima on the mesh
//!
//! After each solve the absolute error is sampled on the mesh, and the points where it peaks
//! become the next reference set. Boundary points count as maxima when the error falls away
//! from them into the interval.
use crate::value::Value;

/// Returns the indices of the local maxima of `errors`, ascending.
///
/// - Index `0` is selected if `errors[0] > errors[1]`.
/// - Index `n-1` is selected if `errors[n-1] > errors[n-2]`.
/// - Interior `i` is selected if `errors[i]` is strictly greater than both neighbours.
///
/// Plateaus are never selected, and NaN compares false so it is never a maximum.
/// A single-point slice yields that point; an empty slice yields nothing.
///
/// # Example
/// ```
/// # use minimax::extrema::local_maxima;
/// let errors = [3.0, 1.0, 2.0, 0.5, 0.7];
/// assert_eq!(local_maxima(&errors), vec![0, 2, 4]);
/// ```
pub fn local_maxima<T: Value>(errors: &[T]) -> Vec<usize> {
    let n = errors.len();
    match n {
        0 => return vec![],
        1 => return vec![0],
        _ => {}
    }

    let mut maxima = Vec::new();
    if errors[0] > errors[1] {
        maxima.push(0);
    }

    maxima.extend(
        errors
            .windows(3)
            .enumerate()
            .filter(|(_, w)| w[1] > w[0] && w[1] > w[2])
            .map(|(i, _)| i + 1),
    );

    if errors[n - 1] > errors[n - 2] {
        maxima.push(n - 1);
    }

    maxima
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short() {
        assert!(local_maxima::<f64>(&[]).is_empty());
        assert_eq!(local_maxima(&[1.0]), vec![0]);
        assert_eq!(local_maxima(&[1.0, 2.0]), vec![1]);
        assert_eq!(local_maxima(&[2.0, 1.0]), vec![0]);
        assert!(local_maxima(&[1.0, 1.0]).is_empty());
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(local_maxima(&[5.0, 4.0, 3.0, 2.0]), vec![0]);
        assert_eq!(local_maxima(&[1.0, 2.0, 3.0, 4.0]), vec![3]);
        assert_eq!(local_maxima(&[1.0, 0.0, 1.0]), vec![0, 2]);
    }

    #[test]
    fn test_interior() {
        let errors = [0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 0.0];
        assert_eq!(local_maxima(&errors), vec![1, 3, 5]);
    }

    #[test]
    fn test_plateau_and_nan() {
        assert!(local_maxima(&[0.0, 1.0, 1.0, 0.0]).is_empty());
        assert_eq!(local_maxima(&[0.0, f64::NAN, 0.0, 1.0, 0.0]), vec![3]);
    }

    #[test]
    fn test_sampled_curve() {
        // |cos(3θ)| on a fine grid peaks at θ = 0, π/3, 2π/3, π
        let mesh: Vec<f64> = (0..=300).map(|i| f64::from(i) * std::f64::consts::PI / 300.0).collect();
        let errors: Vec<f64> = mesh.iter().map(|&t| (3.0 * t).cos().abs()).collect();
        assert_eq!(local_maxima(&errors), vec![0, 100, 200, 300]);
    }
}
