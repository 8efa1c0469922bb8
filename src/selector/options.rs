//! This module defines configuration options for the Kennard-Stone selector.
//!
//! It provides the `SelectorOptions` struct, which lets users choose the pairwise metric and
//! warm-start the selection from a known set of seed indices.

use crate::metric::MetricKind;

/// Configuration parameters for the Kennard-Stone selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorOptions {
    /// The pairwise metric used when the selector builds the distance matrix itself.
    ///
    /// Ignored by [`crate::KennardStone::select_from_matrix`], which consumes a matrix the
    /// caller already built (possibly under a custom metric).
    pub metric: MetricKind,

    /// Warm-start seed indices.
    ///
    /// When empty (the default), the selection is seeded with the globally farthest pair.
    /// When non-empty, the listed samples are taken as already selected, in the given order,
    /// and the greedy growth continues from them. Seeds must be unique, in bounds, and no
    /// more numerous than the requested subset size.
    pub seeds: Vec<usize>,
}
