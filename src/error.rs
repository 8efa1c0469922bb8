use thiserror::Error;

/// The primary error type for all fallible operations in the `kenstone` library.
///
/// Variants fall into two classes: malformed-input errors, which the caller can
/// avoid by validating before invocation, and the internal-consistency error,
/// which indicates a bug in the selection loop itself and should never be
/// observed. It implements `std::error::Error`, allowing it to be composed with
/// other error types in application code.
#[derive(Error, Debug)]
pub enum KenstoneError {
    /// The sample matrix holds fewer than two rows.
    ///
    /// A farthest pair cannot be seeded from fewer than two samples, so this is
    /// rejected before any distance is computed.
    #[error("At least 2 samples are required, got {0}")]
    TooFewSamples(usize),

    /// A sample has an empty feature vector (dimension zero).
    #[error("Sample {0} has an empty feature vector")]
    EmptyFeatureVector(usize),

    /// The sample matrix is ragged: a row's dimension differs from the first row's.
    #[error("Ragged sample matrix: sample {index} has {found} features, expected {expected}")]
    RaggedSampleMatrix {
        /// The index of the offending sample.
        index: usize,
        /// The dimension established by the first sample.
        expected: usize,
        /// The dimension actually found.
        found: usize,
    },

    /// The requested subset size is outside `2 ..= n`.
    ///
    /// The algorithm always selects a farthest pair first, so a subset smaller
    /// than two is meaningless, and it cannot select more samples than exist.
    #[error(
        "Subset size must be at least 2 and at most sample count: requested {requested}, have {available} samples"
    )]
    InvalidSubsetSize {
        /// The subset size the caller asked for.
        requested: usize,
        /// The number of samples available.
        available: usize,
    },

    /// A fractional subset size was outside the half-open interval (0, 1].
    #[error("Subset fraction must lie in (0, 1], got {0}")]
    InvalidFraction(f64),

    /// A warm-start seed list is invalid: an index is out of bounds or
    /// duplicated, or the list is longer than the requested subset.
    #[error("Invalid seed index {index}: {reason}")]
    InvalidSeed {
        /// The offending seed index (or the seed count, for length violations).
        index: usize,
        /// Why the seed was rejected.
        reason: String,
    },

    /// A greedy step found no pickable candidate although unselected samples
    /// remain. This violates an invariant of the selection loop and indicates a
    /// bug (or non-finite distances), not a user error.
    #[error("Selection invariant violated: {0}")]
    InconsistentSelection(String),
}
