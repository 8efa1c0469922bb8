//! This module contains the selector components for performing Kennard-Stone subset selection.
//!
//! It includes the `KennardStone` implementation and `SelectorOptions` for configuring the
//! selection, providing the core functionality of the `kenstone` library.

mod implementation;
mod options;

pub use implementation::KennardStone;
pub use options::SelectorOptions;
