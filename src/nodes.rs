//! Chebyshev node sets over an interval
//!
//! Chebyshev nodes seed the initial reference set of a Remez run, and a dense set of them
//! (plus the interval endpoints) forms the mesh on which the approximation error is sampled.
use crate::value::Value;

/// Returns `n` Chebyshev nodes on the open interval `(a, b)`.
///
/// ```text
/// x_k = (a + b)/2 + (b - a)/2 · cos((2k + 1)π / 2n),   k = 0..n-1
/// ```
///
/// Nodes are returned in formula order, which is **descending** (`cos` decreases as `k` grows).
/// Sort them if you need ascending order. `n = 0` returns an empty vector.
///
/// # Example
/// ```
/// # use minimax::nodes::chebyshev_nodes;
/// let nodes = chebyshev_nodes(3, -1.0, 1.0);
/// assert!(nodes[0] > nodes[1] && nodes[1] > nodes[2]);
/// assert!(f64::abs(nodes[1]) < 1e-15);
/// ```
pub fn chebyshev_nodes<T: Value>(n: usize, a: T, b: T) -> Vec<T> {
    let mid = (a + b) / T::two();
    let half_width = (b - a) / T::two();
    let n2 = T::two() * T::from_positive_int(n);

    (0..n)
        .map(|k| {
            let tk1 = T::two() * T::from_positive_int(k) + T::one();
            mid + half_width * (T::pi() * tk1 / n2).cos()
        })
        .collect()
}

/// Returns `n` Chebyshev nodes on `(a, b)` in ascending order.
pub fn ascending_chebyshev_nodes<T: Value>(n: usize, a: T, b: T) -> Vec<T> {
    let mut nodes = chebyshev_nodes(n, a, b);
    nodes.reverse();
    nodes
}

/// Builds the error mesh for an interval: `points` Chebyshev nodes plus both endpoints.
///
/// The mesh is ascending with no repeated values. Chebyshev nodes cluster towards the
/// endpoints, where the error of a polynomial approximation tends to peak, and the endpoints
/// themselves are included so boundary extrema are sampled exactly.
///
/// # Example
/// ```
/// # use minimax::nodes::error_mesh;
/// let mesh = error_mesh(10, 0.0, 1.0);
/// assert_eq!(mesh.len(), 12);
/// assert_eq!(mesh[0], 0.0);
/// assert_eq!(mesh[11], 1.0);
/// ```
pub fn error_mesh<T: Value>(points: usize, a: T, b: T) -> Vec<T> {
    let mut mesh = Vec::with_capacity(points + 2);
    mesh.push(a);
    mesh.extend(ascending_chebyshev_nodes(points, a, b));
    mesh.push(b);

    // Rounding can push an outer node onto an endpoint for very narrow intervals
    mesh.dedup();
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn test_empty() {
        assert!(chebyshev_nodes::<f64>(0, 0.0, 1.0).is_empty());
        assert_eq!(error_mesh::<f64>(0, 0.0, 1.0), vec![0.0, 1.0]);
    }

    #[test]
    fn test_formula() {
        let nodes = chebyshev_nodes(2, -1.0, 1.0);
        let expected = std::f64::consts::FRAC_1_SQRT_2;
        assert_close!(nodes[0], expected);
        assert_close!(nodes[1], -expected);

        let nodes = chebyshev_nodes(1, 2.0, 4.0);
        assert_close!(nodes[0], 3.0, tol = 1e-15);
    }

    #[test]
    fn test_descending_and_open() {
        let (a, b) = (0.0, std::f64::consts::PI);
        let nodes = chebyshev_nodes(25, a, b);
        assert_eq!(nodes.len(), 25);
        for pair in nodes.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert!(nodes.iter().all(|&x| x > a && x < b));
    }

    #[test]
    fn test_mesh_ascending() {
        let mesh = error_mesh(500, -3.0, 7.0);
        assert_eq!(mesh.len(), 502);
        assert_eq!(mesh[0], -3.0);
        assert_eq!(mesh[501], 7.0);
        for pair in mesh.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
