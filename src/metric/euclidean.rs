//! Standard L2 distance, the default metric of the Kennard-Stone method.

/// Computes the Euclidean distance between two feature vectors.
#[inline]
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Computes the squared Euclidean distance between two feature vectors.
///
/// Skipping the square root preserves the ordering of all pairwise comparisons,
/// so selections made under this metric match those made under [`distance`].
#[inline]
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum()
}
