//! This module implements the all-pairs distance matrix underlying the selection.
//!
//! The matrix is the dominant cost of a Kennard-Stone run (O(n²·d) against the selection
//! loop's O(k·(n−k))), so it is computed once per invocation and reused across every greedy
//! step, and can be shared read-only across runs with different subset sizes. The upper
//! triangle is filled in parallel, one row per task, and mirrored into the lower triangle;
//! the result is bit-identical to a sequential fill.

use crate::{error::KenstoneError, metric::MetricKind, types::SampleView};
use faer::Mat;
use rayon::prelude::*;

/// Raw pointer into the matrix storage, shared across the rayon tasks filling it.
///
/// The row tasks of the triangle fill write to pairwise disjoint entries, so no locking
/// is needed; this wrapper exists only to carry the pointer and strides across thread
/// boundaries.
struct DisjointMatWriter {
    ptr: *mut f64,
    row_stride: isize,
    col_stride: isize,
}

unsafe impl Send for DisjointMatWriter {}
unsafe impl Sync for DisjointMatWriter {}

impl DisjointMatWriter {
    /// Stores `val` at `(row, col)`.
    ///
    /// # Safety
    ///
    /// `(row, col)` must be in bounds, and no concurrent task may target the same entry.
    unsafe fn write(&self, row: usize, col: usize, val: f64) {
        let offset = (row as isize) * self.row_stride + (col as isize) * self.col_stride;
        unsafe {
            *self.ptr.offset(offset) = val;
        }
    }
}

/// A symmetric all-pairs distance matrix over a set of samples.
///
/// Immutable once built; `D[i][j]` is the distance between samples `i` and `j` under the
/// chosen metric, with a zero diagonal.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    values: Mat<f64>,
}

impl DistanceMatrix {
    /// Builds the distance matrix under a built-in metric.
    ///
    /// Validates the sample matrix (at least two samples, non-empty uniform dimension)
    /// before computing any distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use kenstone::{DistanceMatrix, MetricKind};
    ///
    /// let samples = vec![vec![0.0, 0.0], vec![3.0, 4.0]];
    /// let distances = DistanceMatrix::compute(&samples, MetricKind::Euclidean).unwrap();
    ///
    /// assert_eq!(distances.len(), 2);
    /// assert_eq!(distances.get(0, 1), 5.0);
    /// ```
    pub fn compute<S: SampleView>(
        samples: &[S],
        metric: MetricKind,
    ) -> Result<Self, KenstoneError> {
        Self::compute_with(samples, move |a, b| metric.distance(a, b))
    }

    /// Builds the distance matrix under a caller-supplied metric function.
    ///
    /// The function must have the mathematical properties of a distance as far as the
    /// selector is concerned: non-negative, symmetric in its arguments, and zero for a
    /// sample paired with itself. Only the upper triangle is evaluated; the value is
    /// mirrored, so an asymmetric function is silently symmetrized rather than detected.
    pub fn compute_with<S, F>(samples: &[S], metric: F) -> Result<Self, KenstoneError>
    where
        S: SampleView,
        F: Fn(&[f64], &[f64]) -> f64 + Sync,
    {
        validate_samples(samples)?;

        let n = samples.len();
        let features: Vec<&[f64]> = samples.iter().map(SampleView::features).collect();

        let mut values = Mat::zeros(n, n);

        let writer = DisjointMatWriter {
            ptr: values.as_ptr_mut(),
            row_stride: values.row_stride(),
            col_stride: values.col_stride(),
        };

        (0..n).into_par_iter().for_each(|i| {
            let row = features[i];
            for j in (i + 1)..n {
                let d = metric(row, features[j]);

                // SAFETY: row i's task is the sole writer of (i, j) and (j, i) for j > i,
                // so no two tasks ever target the same entry.
                unsafe {
                    writer.write(i, j, d);
                    writer.write(j, i, d);
                }
            }
        });

        Ok(Self { values })
    }

    /// Returns the number of samples (the matrix is `len × len`).
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    /// Returns `true` if the matrix covers no samples. Never true for a built matrix.
    pub fn is_empty(&self) -> bool {
        self.values.nrows() == 0
    }

    /// Returns the distance between samples `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }

    /// Finds the off-diagonal maximum, scanning row by row.
    ///
    /// Returns `(row, col, value)` of the first occurrence of the maximum under a row-major
    /// scan, which for a symmetric matrix always yields `row < col`. The strict comparison
    /// makes the first occurrence win, so ties resolve to the lexicographically smallest
    /// index pair. This scan seeds the selection and is kept sequential to preserve that
    /// ordering guarantee.
    pub fn max_pair(&self) -> (usize, usize, f64) {
        let n = self.len();
        let mut best = (0, 1, f64::NEG_INFINITY);
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let d = self.values[(i, j)];
                if d > best.2 {
                    best = (i, j, d);
                }
            }
        }
        best
    }
}

fn validate_samples<S: SampleView>(samples: &[S]) -> Result<(), KenstoneError> {
    if samples.len() < 2 {
        return Err(KenstoneError::TooFewSamples(samples.len()));
    }

    let dimension = samples[0].features().len();
    for (index, sample) in samples.iter().enumerate() {
        let found = sample.features().len();
        if found == 0 {
            return Err(KenstoneError::EmptyFeatureVector(index));
        }
        if found != dimension {
            return Err(KenstoneError::RaggedSampleMatrix {
                index,
                expected: dimension,
                found,
            });
        }
    }

    Ok(())
}
