//! L∞ distance: the largest absolute coordinate difference.

/// Computes the Chebyshev distance between two feature vectors.
#[inline]
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
