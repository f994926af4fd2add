//! Instrumented sorting and searching for Presort.
//!
//! This crate contrasts searching an unsorted array with searching the same
//! array after sorting it:
//!
//! - [`sort`]: quick, merge, and bubble sort returning new ascending arrays
//! - [`search`]: linear and binary search with comparison counts and probe events
//! - [`profile`]: averaged wall-clock timing of a search
//! - [`trace`]: deterministic sort-then-search step records for replay
//! - [`complexity`]: the static Big-O catalog
//! - [`report`]: the unsorted-versus-sorted comparison the front end displays
//!
//! Every operation takes a validated [`NumericArray`] and leaves it unchanged.
//!
//! [`NumericArray`]: presort_core::NumericArray

mod algorithm;
mod error;

pub mod complexity;
pub mod profile;
pub mod report;
pub mod search;
pub mod sort;
pub mod trace;

pub use algorithm::{SearchAlgorithm, SortAlgorithm, Sortedness};
pub use complexity::{Complexity, ComplexityProfile};
pub use error::{ConfigError, Error, InvariantError};
