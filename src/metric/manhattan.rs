//! L1 (city-block) distance.

/// Computes the Manhattan distance between two feature vectors.
#[inline]
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}
