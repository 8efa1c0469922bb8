//! This module defines the core types used in the kenstone library for representing samples
//! and selection results.
//!
//! It includes the `SampleView` trait for abstracting feature-vector access, the `SubsetSize`
//! enum for expressing the target subset as a count or a fraction, and the `SelectionResult`
//! struct for storing the outcome of a Kennard-Stone run. These types form the foundation for
//! the decoupled design that allows integration with arbitrary sample containers.

use crate::error::KenstoneError;
use serde::Serialize;

/// A trait for viewing a sample's feature vector without owning it.
///
/// This trait provides a common interface for accessing a sample's real-valued features,
/// enabling the distance-matrix builder and the selector to work with different sample
/// representations. By decoupling the algorithm from specific containers, users can run the
/// selection directly on their own data structures without conversion overhead.
pub trait SampleView {
    /// Returns the sample's feature vector.
    ///
    /// All samples passed to a single invocation must share the same dimension; this is
    /// validated before any distance is computed.
    fn features(&self) -> &[f64];
}

impl SampleView for Vec<f64> {
    #[inline(always)]
    fn features(&self) -> &[f64] {
        self
    }
}

impl SampleView for &[f64] {
    #[inline(always)]
    fn features(&self) -> &[f64] {
        self
    }
}

impl<const N: usize> SampleView for [f64; N] {
    #[inline(always)]
    fn features(&self) -> &[f64] {
        self
    }
}

/// The target size of the selected subset, as an absolute count or a fraction.
///
/// Chemometric workflows often specify a train/test split as a fraction of the data set
/// rather than an absolute count; `Fraction` rounds to the nearest integer count. The
/// resolved count is still subject to the `2 <= k <= n` rule enforced by the selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubsetSize {
    /// Select exactly this many samples.
    Count(usize),
    /// Select `round(fraction * sample_count)` samples; the fraction must lie in (0, 1].
    Fraction(f64),
}

impl SubsetSize {
    /// Resolves this size specification against a concrete sample count.
    pub fn resolve(&self, sample_count: usize) -> Result<usize, KenstoneError> {
        match *self {
            SubsetSize::Count(count) => Ok(count),
            SubsetSize::Fraction(fraction) => {
                if !(fraction > 0.0 && fraction <= 1.0) {
                    return Err(KenstoneError::InvalidFraction(fraction));
                }
                Ok((fraction * sample_count as f64).round() as usize)
            }
        }
    }
}

/// The result of a Kennard-Stone subset selection.
///
/// This struct encapsulates the output of a successful run: the selected sample indices in
/// pick order, the complementary remaining indices, and the separation achieved by each pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionResult {
    /// The selected sample indices, in selection order.
    ///
    /// Order carries information: for an auto-seeded run the first two entries are the
    /// globally farthest pair (row index first), and each later entry is the sample picked
    /// at that step.
    pub selected: Vec<usize>,
    /// The indices not selected, in ascending order.
    pub remaining: Vec<usize>,
    /// The max-min distance achieved by each pick.
    ///
    /// For an auto-seeded run the first entry is the seed-pair distance; each subsequent
    /// entry is the picked candidate's distance to its nearest previously selected sample.
    /// Useful as a diagnostic when choosing a subset size.
    pub separations: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_size_count_passes_through() {
        assert_eq!(SubsetSize::Count(7).resolve(10).unwrap(), 7);
    }

    #[test]
    fn test_subset_size_fraction_rounds() {
        assert_eq!(SubsetSize::Fraction(0.75).resolve(10).unwrap(), 8);
        assert_eq!(SubsetSize::Fraction(0.25).resolve(10).unwrap(), 3);
        assert_eq!(SubsetSize::Fraction(1.0).resolve(10).unwrap(), 10);
    }

    #[test]
    fn test_subset_size_fraction_rejects_out_of_range() {
        assert!(matches!(
            SubsetSize::Fraction(0.0).resolve(10),
            Err(KenstoneError::InvalidFraction(_))
        ));
        assert!(matches!(
            SubsetSize::Fraction(1.5).resolve(10),
            Err(KenstoneError::InvalidFraction(_))
        ));
        assert!(matches!(
            SubsetSize::Fraction(f64::NAN).resolve(10),
            Err(KenstoneError::InvalidFraction(_))
        ));
    }
}
