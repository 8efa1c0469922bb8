//! This module implements the core `KennardStone` selector.
//!
//! The selector encapsulates the greedy farthest-point procedure of the Kennard-Stone
//! method: seed with the globally farthest pair, then repeatedly pick the unselected sample
//! whose distance to its nearest selected sample is largest, until the subset reaches the
//! requested size. It operates on a [`DistanceMatrix`] built once up front, and integrates
//! with the broader `kenstone` architecture through the `SampleView` trait so callers can
//! run it directly over their own sample containers.
//!
//! Every tie is resolved deterministically: the seed pair is the first occurrence of the
//! matrix maximum under a row-major scan, and growth ties go to the lowest candidate index.
//! Two runs over identical inputs therefore produce identical output.

use super::options::SelectorOptions;
use crate::{
    error::KenstoneError,
    matrix::DistanceMatrix,
    types::{SampleView, SelectionResult, SubsetSize},
};

/// The Kennard-Stone farthest-point subset selector.
///
/// This struct holds the selection options and provides methods to run the algorithm either
/// from raw samples (building the distance matrix internally) or from a precomputed matrix.
pub struct KennardStone {
    /// Configuration options, such as the metric and warm-start seeds.
    options: SelectorOptions,
}

impl KennardStone {
    /// Creates a new selector with default options (Euclidean metric, farthest-pair seeding).
    ///
    /// # Examples
    ///
    /// ```
    /// use kenstone::KennardStone;
    ///
    /// let selector = KennardStone::new();
    /// let samples = vec![vec![0.0], vec![4.0], vec![9.0]];
    /// let result = selector.select(&samples, 2).unwrap();
    ///
    /// assert_eq!(result.selected, vec![0, 2]);
    /// ```
    pub fn new() -> Self {
        Self {
            options: SelectorOptions::default(),
        }
    }

    /// Configures the selector with custom options.
    ///
    /// This method allows setting a non-default metric or warm-start seeds. It consumes the
    /// selector and returns a new instance with the updated options.
    ///
    /// # Examples
    ///
    /// ```
    /// use kenstone::{KennardStone, MetricKind, SelectorOptions};
    ///
    /// let options = SelectorOptions {
    ///     metric: MetricKind::Manhattan,
    ///     ..Default::default()
    /// };
    /// let selector = KennardStone::new().with_options(options);
    /// ```
    pub fn with_options(mut self, options: SelectorOptions) -> Self {
        self.options = options;
        self
    }

    /// Selects a maximally spread subset of `subset_size` samples.
    ///
    /// Builds the all-pairs distance matrix under the configured metric, then runs the
    /// greedy farthest-point procedure. The returned [`SelectionResult`] lists the selected
    /// indices in pick order and the remaining indices in ascending order; together they
    /// partition `0..samples.len()` exactly.
    ///
    /// # Arguments
    ///
    /// * `samples` - The sample matrix; all rows must share one non-zero dimension.
    /// * `subset_size` - The number of samples to select, in `2 ..= samples.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kenstone::KennardStone;
    ///
    /// let samples = vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0]];
    /// let result = KennardStone::new().select(&samples, 3).unwrap();
    ///
    /// // Samples 0 and 10 are the farthest pair; 2 is then farther from both than 1 is.
    /// assert_eq!(result.selected, vec![0, 3, 2]);
    /// assert_eq!(result.remaining, vec![1]);
    /// ```
    pub fn select<S: SampleView>(
        &self,
        samples: &[S],
        subset_size: usize,
    ) -> Result<SelectionResult, KenstoneError> {
        let distances = DistanceMatrix::compute(samples, self.options.metric)?;
        self.select_from_matrix(&distances, subset_size)
    }

    /// Selects a subset whose size is given as a count or a fraction of the sample set.
    pub fn select_sized<S: SampleView>(
        &self,
        samples: &[S],
        size: SubsetSize,
    ) -> Result<SelectionResult, KenstoneError> {
        self.select(samples, size.resolve(samples.len())?)
    }

    /// Runs the selection over a precomputed distance matrix.
    ///
    /// Use this to amortize the O(n²·d) matrix build across several runs with different
    /// subset sizes, or to supply a matrix built under a custom metric via
    /// [`DistanceMatrix::compute_with`]. The configured metric option is not consulted here.
    pub fn select_from_matrix(
        &self,
        distances: &DistanceMatrix,
        subset_size: usize,
    ) -> Result<SelectionResult, KenstoneError> {
        let n = distances.len();
        if subset_size < 2 || subset_size > n {
            return Err(KenstoneError::InvalidSubsetSize {
                requested: subset_size,
                available: n,
            });
        }

        let mut selected = Vec::with_capacity(subset_size);
        let mut is_selected = vec![false; n];
        let mut separations = Vec::with_capacity(subset_size - 1);

        if self.options.seeds.is_empty() {
            let (row, col, max_distance) = distances.max_pair();
            selected.push(row);
            selected.push(col);
            is_selected[row] = true;
            is_selected[col] = true;
            separations.push(max_distance);
        } else {
            self.validate_seeds(n, subset_size)?;
            for &seed in &self.options.seeds {
                selected.push(seed);
                is_selected[seed] = true;
            }
        }

        // Running minimum distance from each candidate to the selected set, maintained
        // incrementally: after each pick only the distances to the newest selected sample
        // are folded in. Identical to recomputing the minimum from scratch each step.
        let mut min_dists: Vec<f64> = (0..n).map(|c| distances.get(c, selected[0])).collect();
        for &s in &selected[1..] {
            update_running_minimum(distances, &is_selected, &mut min_dists, s);
        }

        while selected.len() < subset_size {
            // Scanning candidates in ascending index with a strict comparison resolves
            // ties toward the lowest index; the is_selected skip guarantees a tied index
            // can never be picked twice.
            let mut pick = None;
            let mut best = f64::NEG_INFINITY;
            for c in 0..n {
                if is_selected[c] {
                    continue;
                }
                if min_dists[c] > best {
                    pick = Some(c);
                    best = min_dists[c];
                }
            }

            let pick = pick.ok_or_else(|| {
                KenstoneError::InconsistentSelection(format!(
                    "no pickable candidate at step {} of {}",
                    selected.len(),
                    subset_size
                ))
            })?;

            selected.push(pick);
            is_selected[pick] = true;
            separations.push(best);
            update_running_minimum(distances, &is_selected, &mut min_dists, pick);
        }

        let remaining = (0..n).filter(|&c| !is_selected[c]).collect();

        Ok(SelectionResult {
            selected,
            remaining,
            separations,
        })
    }

    fn validate_seeds(&self, n: usize, subset_size: usize) -> Result<(), KenstoneError> {
        let seeds = &self.options.seeds;
        if seeds.len() > subset_size {
            return Err(KenstoneError::InvalidSeed {
                index: seeds.len(),
                reason: format!(
                    "{} seeds exceed the requested subset size {}",
                    seeds.len(),
                    subset_size
                ),
            });
        }

        let mut seen = vec![false; n];
        for &seed in seeds {
            if seed >= n {
                return Err(KenstoneError::InvalidSeed {
                    index: seed,
                    reason: format!("out of bounds for {} samples", n),
                });
            }
            if seen[seed] {
                return Err(KenstoneError::InvalidSeed {
                    index: seed,
                    reason: "duplicate seed index".to_string(),
                });
            }
            seen[seed] = true;
        }

        Ok(())
    }
}

impl Default for KennardStone {
    fn default() -> Self {
        Self::new()
    }
}

/// Folds the distances to the newest selected sample into the running minimums.
fn update_running_minimum(
    distances: &DistanceMatrix,
    is_selected: &[bool],
    min_dists: &mut [f64],
    newest: usize,
) {
    for c in 0..min_dists.len() {
        if is_selected[c] {
            continue;
        }
        let d = distances.get(c, newest);
        if d < min_dists[c] {
            min_dists[c] = d;
        }
    }
}
