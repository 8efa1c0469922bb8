//! Built-in pairwise distance metrics.
//!
//! Each submodule exposes a single `distance` function over two feature slices. All built-in
//! metrics are non-negative, symmetric, and zero for identical inputs, which is what the
//! distance-matrix builder and the selector rely on. Callers needing a metric not listed here
//! can build the matrix through [`crate::matrix::DistanceMatrix::compute_with`] with any
//! function having the same properties.

pub mod chebyshev;
pub mod euclidean;
pub mod manhattan;

/// Selects which built-in metric the distance-matrix builder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricKind {
    /// Standard L2 distance. The default, and the metric of the classic Kennard-Stone method.
    #[default]
    Euclidean,
    /// L2 distance without the final square root.
    ///
    /// Induces the same ordering as `Euclidean` on comparisons between distances, and hence
    /// the same selection, at lower cost per pair.
    SquaredEuclidean,
    /// L1 (city-block) distance.
    Manhattan,
    /// L∞ (maximum coordinate difference) distance.
    Chebyshev,
}

impl MetricKind {
    /// Evaluates this metric on a pair of feature vectors.
    #[inline]
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            MetricKind::Euclidean => euclidean::distance(a, b),
            MetricKind::SquaredEuclidean => euclidean::squared_distance(a, b),
            MetricKind::Manhattan => manhattan::distance(a, b),
            MetricKind::Chebyshev => chebyshev::distance(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const A: [f64; 3] = [1.0, 2.0, 3.0];
    const B: [f64; 3] = [4.0, -2.0, 3.0];

    #[test]
    fn test_euclidean() {
        assert_relative_eq!(MetricKind::Euclidean.distance(&A, &B), 5.0);
    }

    #[test]
    fn test_squared_euclidean() {
        assert_relative_eq!(MetricKind::SquaredEuclidean.distance(&A, &B), 25.0);
    }

    #[test]
    fn test_manhattan() {
        assert_relative_eq!(MetricKind::Manhattan.distance(&A, &B), 7.0);
    }

    #[test]
    fn test_chebyshev() {
        assert_relative_eq!(MetricKind::Chebyshev.distance(&A, &B), 4.0);
    }

    #[test]
    fn test_identical_points_are_at_zero_distance() {
        for kind in [
            MetricKind::Euclidean,
            MetricKind::SquaredEuclidean,
            MetricKind::Manhattan,
            MetricKind::Chebyshev,
        ] {
            assert_eq!(kind.distance(&A, &A), 0.0);
            assert_relative_eq!(kind.distance(&A, &B), kind.distance(&B, &A));
        }
    }
}
