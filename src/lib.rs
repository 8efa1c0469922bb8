//! Kennard-Stone farthest-point subset selection.
//!
//! `kenstone` splits a sample matrix into a maximally spread selected subset and its
//! complement, the way chemometric calibration/validation splits are made: seed with the
//! globally farthest pair of samples, then repeatedly add the sample whose distance to its
//! nearest selected neighbour is largest. All ties resolve deterministically, so identical
//! inputs always produce identical splits.
//!
//! ```
//! use kenstone::KennardStone;
//!
//! let samples = vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0]];
//! let result = KennardStone::new().select(&samples, 3).unwrap();
//!
//! assert_eq!(result.selected, vec![0, 3, 2]);
//! assert_eq!(result.remaining, vec![1]);
//! ```

pub mod error;
pub mod matrix;
pub mod metric;
pub mod selector;
pub mod types;

pub use error::KenstoneError;
pub use matrix::DistanceMatrix;
pub use metric::MetricKind;
pub use selector::{KennardStone, SelectorOptions};
pub use types::{SampleView, SelectionResult, SubsetSize};
